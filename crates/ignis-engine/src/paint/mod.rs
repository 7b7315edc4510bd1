//! Color values handed to the GL clear and shader stages.

mod color;

pub use color::Color;
