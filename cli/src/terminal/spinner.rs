use colored::*;
use indicatif::ProgressStyle;
use portr_core::scanner::ProgressCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Creates the span whose progress bar tracks probe completion.
///
/// Returns a disabled span when `visible` is false so every call on it is a no-op.
pub fn scan_span(total: usize, visible: bool) -> Span {
    if !visible {
        return Span::none();
    }

    let span = info_span!("scan", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.blue} {msg} {wide_bar:.green/bright_black} {pos}/{len}",
    ) {
        span.pb_set_style(&style.tick_strings(TICKS).progress_chars("━╸─"));
    }
    span.pb_set_length(total as u64);
    span.pb_set_message("Probing ports");
    span
}

/// Moves the bar of `span` forward after each finished probe.
pub fn progress_callback(span: Span) -> ProgressCallback {
    Box::new(move |done, total| {
        span.pb_set_position(done as u64);
        if done == total {
            span.pb_set_message(&format!("{}", "Finishing up".italic()));
        }
    })
}

pub fn report_open_port(port: u16, service: &str) {
    crate::mprint!(&format!(
        "{} Port {} ({}) is open",
        "[+]".green().bold(),
        port.to_string().green().bold(),
        service
    ));
}
