//! Ignis engine crate.
//!
//! Minimal OpenGL bootstrap: one window, one core-profile context, one shader
//! program, one static vertex buffer, and a polling frame loop that draws
//! them until the window is closed.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
