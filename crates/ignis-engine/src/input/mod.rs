//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates platform events into [`PlatformEvent`]s once per frame.

pub(crate) mod platform;
mod types;

pub use types::{EventBatch, PlatformEvent};
