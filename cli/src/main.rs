mod commands;
mod terminal;

use std::process::ExitCode;

use attackr_common::config::Config;
use attackr_common::error::LogSourceError;
use attackr_core::pipeline::Pipeline;
use commands::CommandLine;
use terminal::{logging, print, screen, spinner};
use tracing::warn;

/// Exit status when the log cannot be read.
const LOG_SOURCE_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cfg: Config = CommandLine::parse_args().into_config();

    logging::init_logging(&cfg);
    print::initialize();

    if cfg.clear_screen
        && let Err(err) = screen::clear()
    {
        warn!("Could not clear the terminal: {err}");
    }

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::error(&err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cfg: &Config) -> anyhow::Result<()> {
    let span = spinner::analysis_span();
    let report = {
        let _guard = span.enter();
        Pipeline::from_config(cfg)
            .with_progress(spinner::lookup_progress(span.clone()))
            .run()?
    };
    drop(span);

    print::report(&report);
    Ok(())
}

fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<LogSourceError>().is_some() {
        LOG_SOURCE_FAILURE
    } else {
        1
    }
}
