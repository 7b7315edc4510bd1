//! Contracts between the frame loop and what it draws.
//!
//! The loop owns timing and presentation; a [`Scene`] only issues GL calls
//! for one frame at a time.

mod app;
mod ctx;

pub use app::Scene;
pub use ctx::FrameCtx;
