use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::coords::Viewport;
use crate::core::Scene;
use crate::device::{BootstrapError, DeviceConfig, GlDevice, GlInfo};
use crate::input::platform::winit::translate_window_event;
use crate::input::{EventBatch, PlatformEvent};
use crate::paint::Color;
use crate::render::Gl;

use super::frame_loop::{FrameLoop, LoopReport};
use super::platform::Platform;

/// Pumps allowed before giving up on the platform delivering `resumed`.
const BOOTSTRAP_PUMP_LIMIT: usize = 64;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub device: DeviceConfig,

    /// Background color used by scenes that clear the framebuffer.
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            clear_color: Color::YELLOW,
        }
    }
}

/// Handed to the scene builder once the context is current.
pub struct SetupCtx<'a, G> {
    pub gl: &'a G,
    pub info: &'a GlInfo,
    pub clear_color: Color,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Bootstraps the window and context, builds the scene, runs the frame
    /// loop and shuts down.
    ///
    /// Any bootstrap or scene setup error is returned before the first frame.
    pub fn run<S, F>(config: RuntimeConfig, build_scene: F) -> Result<LoopReport>
    where
        S: Scene<Gl>,
        F: FnOnce(SetupCtx<'_, Gl>) -> Result<S>,
    {
        let event_loop = EventLoop::new().map_err(BootstrapError::from)?;
        let mut platform = WinitPlatform::bootstrap(event_loop, &config.device)?;
        let info = platform.device.info().clone();

        Self::drive(&mut platform, &info, config.clear_color, build_scene)
    }

    /// Runs everything after bootstrap on an already created platform.
    ///
    /// Shutdown happens exactly once, whether the scene fails to build, the
    /// loop fails, or the loop ends on a quit event.
    pub fn drive<P, S, F>(
        platform: &mut P,
        info: &GlInfo,
        clear_color: Color,
        build_scene: F,
    ) -> Result<LoopReport>
    where
        P: Platform,
        S: Scene<P::Gl>,
        F: FnOnce(SetupCtx<'_, P::Gl>) -> Result<S>,
    {
        let result = Self::setup_and_loop(platform, info, clear_color, build_scene);
        platform.shutdown();
        result
    }

    fn setup_and_loop<P, S, F>(
        platform: &mut P,
        info: &GlInfo,
        clear_color: Color,
        build_scene: F,
    ) -> Result<LoopReport>
    where
        P: Platform,
        S: Scene<P::Gl>,
        F: FnOnce(SetupCtx<'_, P::Gl>) -> Result<S>,
    {
        let mut scene = {
            let gl = platform.gl().context("no rendering context after bootstrap")?;
            build_scene(SetupCtx {
                gl,
                info,
                clear_color,
            })
            .context("failed to set up scene")?
        };

        let report = FrameLoop::run(platform, &mut scene)?;
        log::info!("frame loop stopped after {} frames", report.frames);
        Ok(report)
    }
}

/// Process exit status for a run result: `0` on a graceful quit, `1` on any
/// failure.
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Real platform: a winit event loop driven by polling plus the GL device.
pub struct WinitPlatform {
    // Declared first so the window goes away before the event loop.
    device: GlDevice,
    event_loop: EventLoop<()>,
}

impl WinitPlatform {
    /// Creates the window and context.
    ///
    /// winit only allows window creation while the loop is active, so the
    /// loop is pumped until the platform reports `resumed`.
    pub fn bootstrap(
        mut event_loop: EventLoop<()>,
        config: &DeviceConfig,
    ) -> Result<Self, BootstrapError> {
        let mut boot = BootstrapHandler {
            config,
            device: None,
        };

        for _ in 0..BOOTSTRAP_PUMP_LIMIT {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut boot);

            if let Some(result) = boot.device.take() {
                let device = result?;
                return Ok(Self { device, event_loop });
            }

            if let PumpStatus::Exit(code) = status {
                log::error!("event loop exited with code {code} before the window was created");
                break;
            }
        }

        Err(BootstrapError::NotResumed)
    }
}

impl Platform for WinitPlatform {
    type Gl = Gl;

    fn gl(&self) -> Option<&Gl> {
        self.device.gl()
    }

    fn viewport(&self) -> Viewport {
        self.device.viewport()
    }

    fn poll_events(&mut self, out: &mut EventBatch) {
        let mut drain = EventDrain {
            batch: out,
            resized: None,
        };
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut drain);
        let resized = drain.resized;

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            out.push(PlatformEvent::Quit);
        }

        if let Some(size) = resized {
            self.device.resize(size);
        }
    }

    fn present(&mut self) -> Result<()> {
        self.device.swap_buffers()
    }

    fn shutdown(&mut self) {
        self.device.shutdown();
    }
}

struct BootstrapHandler<'a> {
    config: &'a DeviceConfig,
    device: Option<Result<GlDevice, BootstrapError>>,
}

impl ApplicationHandler for BootstrapHandler<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.device.is_none() {
            self.device = Some(GlDevice::bootstrap(event_loop, self.config));
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

/// Collects translated events during one pump.
struct EventDrain<'a> {
    batch: &'a mut EventBatch,
    resized: Option<PhysicalSize<u32>>,
}

impl ApplicationHandler for EventDrain<'_> {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.resized = Some(size);
        }

        if let Some(ev) = translate_window_event(&event) {
            self.batch.push(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TriangleScene;
    use crate::window::frame_loop::tests::ScriptedPlatform;

    #[test]
    fn quit_run_shuts_down_once_and_exits_zero() {
        let mut platform = ScriptedPlatform::new(vec![vec![PlatformEvent::Quit]]);
        let info = GlInfo::default();

        let result = Runtime::drive(&mut platform, &info, Color::YELLOW, |ctx| {
            TriangleScene::new(ctx.gl, ctx.clear_color)
        });

        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap().frames, 1);
        assert_eq!(platform.teardowns, 1);
    }

    #[test]
    fn scene_failure_still_shuts_down_and_exits_one() {
        let mut platform = ScriptedPlatform::new(vec![vec![PlatformEvent::Quit]]);
        let info = GlInfo::default();

        let result = Runtime::drive(&mut platform, &info, Color::YELLOW, |_| {
            Err::<crate::render::BlankScene, _>(anyhow::anyhow!("shader did not compile"))
        });

        assert_eq!(exit_status(&result), 1);
        assert_eq!(platform.presents, 0);
        assert_eq!(platform.teardowns, 1);
    }

    #[test]
    fn setup_sees_driver_info() {
        let mut platform = ScriptedPlatform::new(vec![vec![PlatformEvent::Quit]]);
        let info = GlInfo {
            vendor: "Acme".into(),
            ..GlInfo::default()
        };

        let mut seen = None;
        Runtime::drive(&mut platform, &info, Color::BLACK, |ctx| {
            seen = Some(ctx.info.vendor.clone());
            Ok(crate::render::BlankScene)
        })
        .unwrap();

        assert_eq!(seen.as_deref(), Some("Acme"));
    }
}
