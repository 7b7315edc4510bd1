//! Pixel-space geometry shared by the device and the frame loop.

mod viewport;

pub use viewport::Viewport;
