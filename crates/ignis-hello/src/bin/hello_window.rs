//! First version: a window and a GL context, presenting empty frames until
//! closed.

use std::process::ExitCode;

use ignis_engine::logging::{init_logging, LoggingConfig};
use ignis_engine::render::BlankScene;
use ignis_engine::window::{exit_status, Runtime, RuntimeConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = Runtime::run(RuntimeConfig::default(), |ctx| {
        println!("{}", ctx.info);
        Ok(BlankScene)
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
