use anyhow::{Context, Result};

use crate::core::{FrameCtx, Scene};
use crate::input::EventBatch;

use super::platform::Platform;

/// Loop state. Moves from `Running` to `Stopped` once and never back.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Summary returned when the loop stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoopReport {
    /// Frames drawn and presented.
    pub frames: u64,
}

/// Poll, draw, present until a quit event arrives.
pub struct FrameLoop;

impl FrameLoop {
    /// Runs the loop on the calling thread.
    ///
    /// A quit event stops the loop only after the iteration that received it
    /// has drawn and presented its frame.
    pub fn run<P, S>(platform: &mut P, scene: &mut S) -> Result<LoopReport>
    where
        P: Platform,
        S: Scene<P::Gl>,
    {
        let mut state = LoopState::Running;
        let mut events = EventBatch::default();
        let mut report = LoopReport::default();

        while state == LoopState::Running {
            events.clear();
            platform.poll_events(&mut events);

            if events.quit_requested() {
                log::info!("quit requested after {} frames", report.frames);
                state = LoopState::Stopped;
            }

            let frame = FrameCtx {
                viewport: platform.viewport(),
                frame_index: report.frames,
            };

            {
                let gl = platform
                    .gl()
                    .context("rendering context released while the frame loop was running")?;
                scene.predraw(gl, &frame);
                scene.draw(gl, &frame);
            }

            platform
                .present()
                .with_context(|| format!("failed to present frame {}", frame.frame_index))?;

            report.frames += 1;
        }

        Ok(report)
    }
}
