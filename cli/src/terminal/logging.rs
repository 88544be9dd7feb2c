use attackr_common::config::Config;
use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Prefixes each event with a coloured level marker. Debug and trace events
/// also carry the module they came from.
pub struct AttackrFormatter;

impl<S, N> FormatEvent<S, N> for AttackrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{} ", marker(*meta.level()))?;

        if matches!(*meta.level(), Level::DEBUG | Level::TRACE) {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn marker(level: Level) -> ColoredString {
    match level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        Level::TRACE => "[ ]".dimmed(),
    }
}

/// Status output goes to stderr, through the progress bar's writer, so
/// stdout carries nothing but the report. `RUST_LOG` overrides the flags.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(cfg.quiet, cfg.verbose).as_str()));

    let indicatif_layer = IndicatifLayer::new();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(indicatif_layer.get_stderr_writer())
        .event_format(AttackrFormatter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer)
        .init();
}

fn level_for(quiet: u8, verbose: u8) -> Level {
    match (quiet, verbose) {
        (1.., _) => Level::WARN,
        (0, 0) => Level::INFO,
        (0, 1) => Level::DEBUG,
        _ => Level::TRACE,
    }
}
