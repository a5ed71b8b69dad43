use portr_common::network::ports::Port;
use portr_common::services::Service;

/// Result of probing one port.
///
/// Only `Open` survives into a report; the other variants are dropped by
/// the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A full TCP handshake completed within the timeout.
    Open(Service),
    /// Refused, timed out, unreachable or any other network-level failure.
    ClosedOrFiltered,
    /// The probe itself failed to run (e.g. its task panicked).
    ProbeError(String),
}

/// An open port and the service presumed to run on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpenPort {
    pub port: Port,
    pub service: Service,
}

impl OpenPort {
    pub fn new(port: Port, service: Service) -> Self {
        Self { port, service }
    }
}

/// Frozen result of a finished scan. `open_ports` is ascending by port.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub open_ports: Vec<OpenPort>,
    /// Number of batches the dispatcher ran.
    pub batches: usize,
    /// Number of probes that reached a final outcome.
    pub probed: usize,
}

impl ScanReport {
    pub fn len(&self) -> usize {
        self.open_ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_ports.is_empty()
    }

    /// `(port, service name)` pairs in report order.
    pub fn pairs(&self) -> Vec<(Port, &'static str)> {
        self.open_ports
            .iter()
            .map(|open| (open.port, open.service.name()))
            .collect()
    }
}
