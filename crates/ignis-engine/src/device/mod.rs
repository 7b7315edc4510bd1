//! Window + GL context management.
//!
//! This module is responsible for:
//! - creating the window and picking a framebuffer config
//! - creating the GL context and window surface and making them current
//! - loading GL entry points and reporting driver strings
//! - tearing all of it down exactly once

mod config;
mod error;
mod gl_device;
mod handle;
mod info;

pub use config::{DeviceConfig, GlRequest, WindowConfig};
pub use error::BootstrapError;
pub use gl_device::GlDevice;
pub use handle::PlatformHandle;
pub use info::GlInfo;
