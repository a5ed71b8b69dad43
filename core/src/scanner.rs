//! The central **orchestration** of a port scan.
//!
//! This module owns the [`Prober`] abstraction that concrete probing strategies
//! (such as [`crate::network::tcp::TcpConnectProber`]) implement, and the
//! [`Dispatcher`] that runs them across a port set.
//!
//! **Scheduling model:**
//! Ports are split into consecutive batches of at most `concurrency` ports.
//! Every port of a batch is probed concurrently, and the next batch only
//! starts once every probe of the current one has finished. Batch
//! boundaries are the only synchronization points, so the number of probes
//! in flight never exceeds the ceiling.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portr_common::ScanError;
use portr_common::config::Config;
use portr_common::network::ports::{Port, PortSpec};
use portr_common::network::target::ScanTarget;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::network::resolver;

mod aggregator;
mod models;

pub use aggregator::{OpenPortCallback, ResultAggregator};
pub use models::{OpenPort, ProbeOutcome, ScanReport};

/// Defines the strategy for probing a single transport-layer port.
///
/// Implementations must always return within `timeout` (plus scheduling
/// slack) and must fold every failure into a [`ProbeOutcome`].
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: IpAddr, port: Port, timeout: Duration) -> ProbeOutcome;
}

/// Called after each probe with `(completed, total)`.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Runs a [`Prober`] over a port set in bounded batches.
pub struct Dispatcher<P> {
    prober: Arc<P>,
    stop: Arc<AtomicBool>,
    on_progress: Option<ProgressCallback>,
}

impl<P: Prober + 'static> Dispatcher<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
            stop: Arc::new(AtomicBool::new(false)),
            on_progress: None,
        }
    }

    /// Once `stop` is set no further batch is started, and a scan that sees
    /// it at any batch boundary ends with [`ScanError::Interrupted`].
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probes every port in `ports` against `target`.
    ///
    /// Open ports are handed to `aggregator` the moment their probe
    /// completes. Returns only after every batch has finished, or with
    /// [`ScanError::Interrupted`] if the stop flag was raised at any point.
    pub async fn dispatch(
        &self,
        target: &ScanTarget,
        ports: &[Port],
        aggregator: &Arc<ResultAggregator>,
    ) -> Result<ScanReport, ScanError> {
        let cap: usize = target.concurrency();
        if cap == 0 {
            return Err(ScanError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }

        let total: usize = ports.len();
        let mut completed: usize = 0;
        let mut batches: usize = 0;

        for batch in ports.chunks(cap) {
            self.check_stop(batches, completed, total)?;

            batches += 1;
            debug!("batch {batches}: probing {} ports", batch.len());
            completed += self.run_batch(target, batch, aggregator, completed, total).await;
        }
        // an interrupt during the last batch still discards the report
        self.check_stop(batches, completed, total)?;

        Ok(ScanReport {
            batches,
            probed: completed,
            ..aggregator.finalize()
        })
    }

    fn check_stop(&self, batches: usize, completed: usize, total: usize) -> Result<(), ScanError> {
        if self.stop.load(Ordering::SeqCst) {
            debug!("stopping after {batches} batches, {completed}/{total} ports probed");
            return Err(ScanError::Interrupted);
        }
        Ok(())
    }

    /// Probes one batch concurrently and waits for all of it.
    async fn run_batch(
        &self,
        target: &ScanTarget,
        batch: &[Port],
        aggregator: &Arc<ResultAggregator>,
        done_before: usize,
        total: usize,
    ) -> usize {
        let mut tasks: JoinSet<(Port, ProbeOutcome)> = JoinSet::new();

        for &port in batch {
            let prober = Arc::clone(&self.prober);
            let aggregator = Arc::clone(aggregator);
            let addr: IpAddr = target.addr();
            let timeout: Duration = target.timeout();

            tasks.spawn(async move {
                let outcome: ProbeOutcome = prober.probe(addr, port, timeout).await;
                if let ProbeOutcome::Open(service) = outcome {
                    aggregator.record(port, service);
                }
                (port, outcome)
            });
        }

        let mut finished: usize = 0;
        while let Some(joined) = tasks.join_next().await {
            let outcome: ProbeOutcome = match joined {
                Ok((_port, outcome)) => outcome,
                Err(e) => ProbeOutcome::ProbeError(e.to_string()),
            };
            if let ProbeOutcome::ProbeError(reason) = &outcome {
                debug!("probe discarded: {reason}");
            }

            finished += 1;
            if let Some(callback) = &self.on_progress {
                callback(done_before + finished, total);
            }
        }
        finished
    }
}

/// Executes a full scan of `host` over `spec`.
///
/// Configuration, port specification and name resolution are all checked
/// before the first probe is sent; any failure there aborts the scan.
pub async fn perform_scan<P: Prober + 'static>(
    host: &str,
    spec: &str,
    cfg: &Config,
    dispatcher: &Dispatcher<P>,
    aggregator: &Arc<ResultAggregator>,
) -> Result<ScanReport, ScanError> {
    cfg.validate()?;
    let spec: PortSpec = spec.parse()?;
    let addr: IpAddr = resolver::resolve_host(host).await?;
    let target: ScanTarget = ScanTarget::from_config(addr, cfg)?;

    info!(
        "Scanning {} ports on {addr} ({} at a time, {:.2}s timeout)",
        spec.port_count(),
        target.concurrency(),
        target.timeout().as_secs_f64()
    );

    dispatcher.dispatch(&target, &spec.ports(), aggregator).await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
