/// Window placement and title.
///
/// Sizes and positions are physical pixels so the drawable matches the
/// requested resolution regardless of display scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            width: 640,
            height: 480,
            x: 0,
            y: 0,
        }
    }
}

/// Requested GL context: core profile, double buffered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlRequest {
    pub major: u8,
    pub minor: u8,

    /// Minimum depth-buffer precision in bits.
    pub depth_bits: u8,
}

impl Default for GlRequest {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 1,
            depth_bits: 24,
        }
    }
}

/// Initialization parameters for the device layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    pub window: WindowConfig,
    pub gl: GlRequest,

    /// Request a swap interval of one. Unsupported platforms keep their default.
    pub vsync: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gl: GlRequest::default(),
            vsync: true,
        }
    }
}
