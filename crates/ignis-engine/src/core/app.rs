use crate::render::GlApi;

use super::ctx::FrameCtx;

/// Per-frame drawing contract driven by the frame loop.
///
/// `predraw` prepares global pipeline state, `draw` issues the draw calls.
/// The loop presents the frame after both return.
pub trait Scene<G: GlApi> {
    /// Called before `draw` each frame.
    fn predraw(&mut self, gl: &G, frame: &FrameCtx) {
        let _ = (gl, frame);
    }

    /// Called once per frame.
    fn draw(&mut self, gl: &G, frame: &FrameCtx);
}
