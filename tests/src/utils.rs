use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portr_common::network::ports::Port;
use portr_common::services::Service;
use portr_core::scanner::{ProbeOutcome, Prober};
use tokio::net::TcpListener;

/// Stands in for a remote host with a fixed set of open ports.
pub struct SimulatedHost {
    open: HashSet<Port>,
    calls: AtomicUsize,
}

impl SimulatedHost {
    pub fn with_open(open: &[Port]) -> Self {
        Self {
            open: open.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for SimulatedHost {
    async fn probe(&self, _addr: IpAddr, port: Port, _timeout: Duration) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1)).await;
        if self.open.contains(&port) {
            ProbeOutcome::Open(Service::lookup(port))
        } else {
            ProbeOutcome::ClosedOrFiltered
        }
    }
}

/// Binds a loopback listener on an ephemeral port.
pub async fn open_listener() -> anyhow::Result<(TcpListener, Port)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

/// A loopback port with nothing listening on it.
pub async fn closed_port() -> anyhow::Result<Port> {
    let (listener, port) = open_listener().await?;
    drop(listener);
    Ok(port)
}
