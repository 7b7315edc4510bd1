use std::num::NonZeroU32;

use anyhow::{Context as _, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::coords::Viewport;
use crate::render::Gl;

use super::{BootstrapError, DeviceConfig, GlInfo, PlatformHandle};

/// Owns the window, its GL surface and context, and the loaded entry points.
///
/// This type is the platform side of the renderer:
/// - creates the window at a fixed position and size
/// - creates a core-profile context and makes it current
/// - presents frames by swapping buffers
/// - releases everything once on [`shutdown`](Self::shutdown) or drop
pub struct GlDevice {
    parts: PlatformHandle<DeviceParts>,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    info: GlInfo,
}

// Field order is drop order: entry points, then surface and context, then
// the window they were created for.
struct DeviceParts {
    gl: Gl,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlDevice {
    /// Creates the window and a current GL context for it.
    ///
    /// Must run while the event loop is active (inside `resumed`), which is
    /// where winit allows window creation.
    pub fn bootstrap(
        event_loop: &ActiveEventLoop,
        config: &DeviceConfig,
    ) -> Result<Self, BootstrapError> {
        let win = &config.window;
        let req = config.gl;

        let attrs = Window::default_attributes()
            .with_title(win.title.clone())
            .with_inner_size(PhysicalSize::new(win.width, win.height))
            .with_position(PhysicalPosition::new(win.x, win.y))
            .with_resizable(false);

        let template = ConfigTemplateBuilder::new()
            .with_depth_size(req.depth_bits)
            .with_single_buffering(false);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                pick_config(configs, req.depth_bits)
            })
            .map_err(|e| BootstrapError::Display(e.to_string()))?;

        let window = window.ok_or(BootstrapError::Window)?;

        if gl_config.depth_size() < req.depth_bits {
            return Err(BootstrapError::DepthBuffer {
                requested: req.depth_bits,
                found: gl_config.depth_size(),
            });
        }

        let display = gl_config.display();
        let raw_handle = window.window_handle()?.as_raw();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(req.major, req.minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        // SAFETY: `raw_handle` belongs to `window`, which outlives the context
        // (see `DeviceParts` drop order).
        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .map_err(|source| BootstrapError::Context {
                major: req.major,
                minor: req.minor,
                source,
            })?;

        let surface_attrs = window.build_surface_attributes(Default::default())?;

        // SAFETY: same window ownership argument as for the context.
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .map_err(BootstrapError::Surface)?;

        let context = not_current
            .make_current(&surface)
            .map_err(BootstrapError::MakeCurrent)?;

        if display.get_proc_address(c"glGetString").is_null() {
            return Err(BootstrapError::Loader("glGetString"));
        }

        // SAFETY: the context was made current on this thread just above.
        let gl = unsafe {
            Gl::from_raw(glow::Context::from_loader_function_cstr(|name| {
                display.get_proc_address(name)
            }))
        };

        if config.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync unavailable, keeping platform swap interval: {e}");
            }
        }

        let info = GlInfo::query(&gl);
        log::info!(
            "GL context ready: {} / {} / {} (GLSL {})",
            info.vendor,
            info.renderer,
            info.version,
            info.shading_language
        );

        let size = window.inner_size();

        Ok(Self {
            parts: PlatformHandle::new(DeviceParts {
                gl,
                surface,
                context,
                window,
            }),
            size,
            info,
        })
    }

    /// Driver strings captured at bootstrap.
    pub fn info(&self) -> &GlInfo {
        &self.info
    }

    /// Loaded entry points, or `None` after shutdown.
    pub fn gl(&self) -> Option<&Gl> {
        self.parts.get().map(|p| &p.gl)
    }

    /// Returns the current drawable size.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size.width, self.size.height)
    }

    pub fn is_live(&self) -> bool {
        self.parts.is_live()
    }

    /// Resizes the GL surface to match the window.
    ///
    /// Zero-sized updates only record the size; the surface keeps its last
    /// valid dimensions.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;

        let (Some(w), Some(h)) = (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        if let Some(parts) = self.parts.get() {
            parts.surface.resize(&parts.context, w, h);
        }
    }

    /// Presents the back buffer.
    ///
    /// May block until the next vertical blank when vsync is active.
    pub fn swap_buffers(&self) -> Result<()> {
        let parts = self
            .parts
            .get()
            .context("cannot present: device already shut down")?;

        parts.window.pre_present_notify();
        parts
            .surface
            .swap_buffers(&parts.context)
            .context("failed to swap buffers")
    }

    /// Destroys the surface, context and window.
    ///
    /// Safe to call more than once; only the first call does anything.
    pub fn shutdown(&mut self) {
        if self.parts.release() {
            log::debug!("GL device shut down");
        }
    }
}

impl Drop for GlDevice {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Prefers the first config meeting the depth requirement, otherwise the
/// deepest one so the caller can report what was available.
///
/// The picker cannot return an error, so an empty candidate list can only
/// panic here.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>, min_depth: u8) -> Config {
    configs
        .reduce(|best, candidate| {
            if best.depth_size() < min_depth && candidate.depth_size() > best.depth_size() {
                candidate
            } else {
                best
            }
        })
        .expect("glutin offers at least one config to the picker")
}
