use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use portr_common::ScanError;
use portr_common::config::Config;
use portr_common::network::ports::Port;
use portr_core::network::tcp::TcpConnectProber;
use portr_core::scanner::{self, Dispatcher, ResultAggregator, ScanReport};

use crate::utils::{SimulatedHost, closed_port, open_listener};

fn config(concurrency: i64, timeout_secs: f64) -> Config {
    Config::new(concurrency, timeout_secs).expect("valid test config")
}

/// Only port 22 answers inside 20-25.
#[tokio::test]
async fn range_with_single_ssh_port() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[22]));
    let aggregator = Arc::new(ResultAggregator::new());

    let report: ScanReport =
        scanner::perform_scan("192.0.2.10", "20-25", &config(4, 1.0), &dispatcher, &aggregator)
            .await?;

    assert_eq!(report.pairs(), vec![(22, "SSH")]);
    assert_eq!(report.batches, 2);
    assert_eq!(dispatcher.prober().calls(), 6);
    Ok(())
}

/// 80 and 443 open, 8080 closed.
#[tokio::test]
async fn list_with_web_ports() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[80, 443]));
    let aggregator = Arc::new(ResultAggregator::new());

    let report: ScanReport = scanner::perform_scan(
        "192.0.2.10",
        "80,443,8080",
        &config(100, 1.0),
        &dispatcher,
        &aggregator,
    )
    .await?;

    assert_eq!(report.pairs(), vec![(80, "HTTP"), (443, "HTTPS")]);
    Ok(())
}

/// Ctrl-C while the single batch of a short list is still running.
#[tokio::test]
async fn interrupt_during_the_only_batch_is_reported() {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_ref = Arc::clone(&stop);
    let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[80, 443]))
        .with_stop_flag(stop)
        .on_progress(Box::new(move |_, _| stop_ref.store(true, Ordering::SeqCst)));
    let aggregator = Arc::new(ResultAggregator::new());

    let result =
        scanner::perform_scan("192.0.2.10", "80,443", &config(100, 1.0), &dispatcher, &aggregator)
            .await;

    assert_eq!(result, Err(ScanError::Interrupted));
    assert_eq!(result.unwrap_err().exit_code(), 130);
    assert_eq!(dispatcher.prober().calls(), 2);
}

#[tokio::test]
async fn zero_concurrency_is_rejected_before_probing() {
    assert!(matches!(
        Config::new(0, 1.0),
        Err(ScanError::InvalidConfig(_))
    ));

    let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[22]));
    let aggregator = Arc::new(ResultAggregator::new());
    let cfg = Config {
        concurrency: 0,
        ..Config::default()
    };

    let result = scanner::perform_scan("127.0.0.1", "20-25", &cfg, &dispatcher, &aggregator).await;

    assert!(matches!(result, Err(ScanError::InvalidConfig(_))));
    assert_eq!(dispatcher.prober().calls(), 0);
}

#[tokio::test]
async fn unresolvable_target_is_fatal() {
    let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[22]));
    let aggregator = Arc::new(ResultAggregator::new());

    let result = scanner::perform_scan(
        "no-such-host.invalid",
        "20-25",
        &config(10, 1.0),
        &dispatcher,
        &aggregator,
    )
    .await;

    assert!(matches!(result, Err(ScanError::ResolutionFailure { .. })));
    assert_eq!(dispatcher.prober().calls(), 0);
    assert!(aggregator.is_empty());
}

#[tokio::test]
async fn malformed_specs_are_fatal() {
    for spec in ["abc", "25-20", "0-10", "80,65536"] {
        let dispatcher = Dispatcher::new(SimulatedHost::with_open(&[22]));
        let aggregator = Arc::new(ResultAggregator::new());

        let result =
            scanner::perform_scan("127.0.0.1", spec, &config(10, 1.0), &dispatcher, &aggregator)
                .await;

        assert!(
            matches!(result, Err(ScanError::InvalidSpec { .. })),
            "{spec} should be rejected"
        );
        assert_eq!(dispatcher.prober().calls(), 0);
    }
}

/// Real sockets on loopback: two listeners, one freed port.
#[tokio::test]
async fn loopback_connect_scan_finds_listeners() -> anyhow::Result<()> {
    let (_first, first_port) = open_listener().await?;
    let (_second, second_port) = open_listener().await?;
    let closed: Port = closed_port().await?;

    let spec = format!("{second_port},{closed},{first_port}");
    let dispatcher = Dispatcher::new(TcpConnectProber);
    let aggregator = Arc::new(ResultAggregator::new());

    let cfg = config(2, 1.0);
    let report = scanner::perform_scan("127.0.0.1", &spec, &cfg, &dispatcher, &aggregator).await?;

    let mut expected: Vec<Port> = vec![first_port, second_port];
    expected.sort_unstable();
    let found: Vec<Port> = report.open_ports.iter().map(|open| open.port).collect();
    assert_eq!(found, expected);
    assert_eq!(report.probed, 3);
    assert_eq!(report.batches, 2);
    Ok(())
}

#[tokio::test]
async fn repeated_scans_of_a_closed_port_agree() -> anyhow::Result<()> {
    let closed: Port = closed_port().await?;
    let spec = closed.to_string();

    for _ in 0..2 {
        let dispatcher = Dispatcher::new(TcpConnectProber);
        let aggregator = Arc::new(ResultAggregator::new());
        let report =
            scanner::perform_scan("127.0.0.1", &spec, &config(1, 0.5), &dispatcher, &aggregator)
                .await?;
        assert!(report.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn duplicate_ports_are_reported_twice() -> anyhow::Result<()> {
    let (_listener, port) = open_listener().await?;
    let dispatcher = Dispatcher::new(TcpConnectProber);
    let aggregator = Arc::new(ResultAggregator::new());

    let report = scanner::perform_scan(
        "127.0.0.1",
        &format!("{port},{port}"),
        &config(10, 1.0),
        &dispatcher,
        &aggregator,
    )
    .await?;

    assert_eq!(report.len(), 2);
    assert_eq!(report.open_ports[0], report.open_ports[1]);
    Ok(())
}
