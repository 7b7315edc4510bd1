//! Window runtime: the platform seam, the frame loop and the top-level run
//! sequence (bootstrap, scene setup, loop, shutdown).

mod frame_loop;
mod platform;
mod runtime;

pub use frame_loop::{FrameLoop, LoopReport, LoopState};
pub use platform::Platform;
pub use runtime::{exit_status, Runtime, RuntimeConfig, SetupCtx, WinitPlatform};
