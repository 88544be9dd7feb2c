use attackr_core::geo::{LookupEvent, LookupProgress};
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Span whose progress bar tracks the run. Hidden when stderr is not a
/// terminal or status output is filtered out.
pub fn analysis_span() -> Span {
    let span = info_span!("analysis", indicatif.pb_show = true);
    span.pb_set_style(&style("{spinner:.blue} {msg}"));
    span.pb_set_message("Analyzing log...");
    span
}

/// Feeds geolocation progress into `span`'s bar.
pub fn lookup_progress(span: Span) -> Box<LookupProgress<'static>> {
    Box::new(move |event: LookupEvent| match event {
        LookupEvent::Started { total } => {
            span.pb_set_style(&style("{spinner:.blue} {msg} {pos}/{len}"));
            span.pb_set_length(total as u64);
            span.pb_set_message("Resolving countries");
        }
        LookupEvent::Resolved => span.pb_inc(1),
    })
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}
