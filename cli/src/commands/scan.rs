use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Local;
use colored::*;
use portr_common::config::Config;
use portr_common::error::EXIT_INTERRUPTED;
use portr_common::network::ports::PortSpec;
use portr_core::network::tcp::TcpConnectProber;
use portr_core::scanner::{self, Dispatcher, ResultAggregator, ScanReport};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug};

use crate::commands::ScanArgs;
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn scan(args: &ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let stop: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    let interrupt_watcher: JoinHandle<()> = watch_interrupts(stop.clone());

    // Used for the progress bar length only; perform_scan reports a bad spec.
    let total: usize = args.ports.parse::<PortSpec>().map_or(0, |spec| spec.port_count());
    let span = spinner::scan_span(total, cfg.quiet == 0);

    let quiet: u8 = cfg.quiet;
    let aggregator = Arc::new(ResultAggregator::with_callback(Box::new(move |open| {
        if quiet < 2 {
            spinner::report_open_port(open.port, open.service.name());
        }
    })));
    let dispatcher = Dispatcher::new(TcpConnectProber)
        .with_stop_flag(stop)
        .on_progress(spinner::progress_callback(span.clone()));

    if cfg.quiet == 0 {
        print::print_status(format!(
            "Target {} started at {}",
            args.target.color(colors::ACCENT),
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string().color(colors::PRIMARY)
        ));
    }

    let start_time: Instant = Instant::now();
    let result = scanner::perform_scan(&args.target, &args.ports, cfg, &dispatcher, &aggregator)
        .instrument(span)
        .await;
    interrupt_watcher.abort();
    drop(dispatcher);

    let report: ScanReport = result?;
    scan_ends(&report, start_time.elapsed(), cfg);
    Ok(())
}

/// First Ctrl-C stops new batches, a second one exits immediately.
fn watch_interrupts(stop: Arc<AtomicBool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        stop.store(true, Ordering::SeqCst);
        debug!("interrupt received, waiting for in-flight probes");

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
    })
}

fn scan_ends(report: &ScanReport, total_time: Duration, cfg: &Config) {
    if report.is_empty() {
        no_ports_found(cfg);
        return;
    }

    if cfg.quiet == 0 {
        mprint!();
    }

    print::header("Open Ports", cfg.quiet);
    print_open_ports(report);
    print_summary(report, total_time, cfg);
}

fn no_ports_found(cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    print::header("ZERO OPEN PORTS", cfg.quiet);
    if cfg.quiet == 0 {
        print::no_results();
    }
}

fn print_open_ports(report: &ScanReport) {
    let details: Vec<(String, ColoredString)> = report
        .open_ports
        .iter()
        .map(format::open_port_to_detail)
        .collect();

    print::set_key_width(format::key_width(details.iter().map(|(key, _)| key)));
    for (key, value) in details {
        print::aligned_line(&key, value);
    }
}

fn print_summary(report: &ScanReport, total_time: Duration, cfg: &Config) {
    let unit: &str = if report.len() == 1 { "open port" } else { "open ports" };
    let open_ports: ColoredString = format!("{} {unit}", report.len()).bold().green();
    let probed: ColoredString = format!("{} probed", report.probed).bold();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Scan Complete: {open_ports} of {probed} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => {
            mprint!();
            mprint!(&output.to_string());
        }
        _ => {}
    }
}
