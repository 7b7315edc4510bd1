use anyhow::Result;

use crate::coords::Viewport;
use crate::input::EventBatch;
use crate::render::GlApi;

/// What the frame loop needs from a window system.
///
/// Implemented by [`WinitPlatform`](super::WinitPlatform) for real windows
/// and by scripted doubles in tests.
pub trait Platform {
    type Gl: GlApi;

    /// Entry points of the current context, or `None` once shut down.
    fn gl(&self) -> Option<&Self::Gl>;

    /// Drawable size in physical pixels.
    fn viewport(&self) -> Viewport;

    /// Drains every pending event into `out` without blocking.
    fn poll_events(&mut self, out: &mut EventBatch);

    /// Presents the frame drawn since the previous call.
    fn present(&mut self) -> Result<()>;

    /// Destroys the window and context. Must tolerate repeated calls.
    fn shutdown(&mut self);
}
