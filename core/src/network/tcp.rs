use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use portr_common::network::ports::Port;
use portr_common::services::Service;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use crate::scanner::{ProbeOutcome, Prober};

/// Connect-scan prober backed by real TCP sockets.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpConnectProber;

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, addr: IpAddr, port: Port, probe_timeout: Duration) -> ProbeOutcome {
        connect_probe(addr, port, probe_timeout).await
    }
}

/// Attempts one TCP handshake with `addr:port`, bounded by `probe_timeout`.
///
/// The stream is dropped as soon as the connection is established; no data
/// is exchanged.
pub async fn connect_probe(addr: IpAddr, port: Port, probe_timeout: Duration) -> ProbeOutcome {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            ProbeOutcome::Open(Service::lookup(port))
        }
        Ok(Err(err)) => classify_connect_error(socket_addr, &err),
        Err(_elapsed) => {
            trace!("{socket_addr} timed out after {probe_timeout:?}");
            ProbeOutcome::ClosedOrFiltered
        }
    }
}

/// Every connect error maps to `ClosedOrFiltered`.
///
/// A plain connect cannot tell a closed port from a firewalled one or from
/// an unreachable host, so the kinds are only kept apart for tracing.
fn classify_connect_error(socket_addr: SocketAddr, err: &io::Error) -> ProbeOutcome {
    let reason: &str = match err.kind() {
        io::ErrorKind::ConnectionRefused => "refused",
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => "reset",
        io::ErrorKind::TimedOut => "timed out",
        io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => "unreachable",
        io::ErrorKind::AddrNotAvailable | io::ErrorKind::AddrInUse => "no local address",
        io::ErrorKind::PermissionDenied => "denied",
        _ => "failed",
    };
    trace!("{socket_addr} {reason}: {err}");
    ProbeOutcome::ClosedOrFiltered
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
