//! Second version: an orange triangle drawn with a linked shader program
//! from a static vertex buffer.

use std::process::ExitCode;

use ignis_engine::logging::{init_logging, LoggingConfig};
use ignis_engine::render::TriangleScene;
use ignis_engine::window::{exit_status, Runtime, RuntimeConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = Runtime::run(RuntimeConfig::default(), |ctx| {
        println!("{}", ctx.info);
        TriangleScene::new(ctx.gl, ctx.clear_color)
    });

    match &result {
        Ok(report) => {
            log::debug!("presented {} frames", report.frames);
            println!("Goodbye");
        }
        Err(e) => eprintln!("error: {e:#}"),
    }

    ExitCode::from(exit_status(&result))
}
