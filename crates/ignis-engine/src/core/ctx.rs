use crate::coords::Viewport;

/// Per-frame context passed to [`Scene`](super::Scene) callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameCtx {
    /// Drawable size in physical pixels at the start of the frame.
    pub viewport: Viewport,

    /// Zero-based index of the frame being drawn.
    pub frame_index: u64,
}
