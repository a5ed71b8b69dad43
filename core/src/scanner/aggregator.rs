//! Thread-safe, append-only collector for open ports.

use std::sync::{Mutex, PoisonError};

use portr_common::network::ports::Port;
use portr_common::services::Service;

use super::models::{OpenPort, ScanReport};

pub type OpenPortCallback = Box<dyn Fn(OpenPort) + Send + Sync>;

/// Collects findings from concurrently completing probes.
///
/// One instance belongs to one scan. It is shared with the probe tasks
/// through an `Arc` and read back with [`ResultAggregator::finalize`].
#[derive(Default)]
pub struct ResultAggregator {
    open_ports: Mutex<Vec<OpenPort>>,
    on_open: Option<OpenPortCallback>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`ResultAggregator::new`], but `callback` runs for every
    /// recorded port, outside the lock.
    pub fn with_callback(callback: OpenPortCallback) -> Self {
        Self {
            open_ports: Mutex::new(Vec::new()),
            on_open: Some(callback),
        }
    }

    pub fn record(&self, port: Port, service: Service) {
        let entry = OpenPort::new(port, service);
        {
            let mut open_ports = self.open_ports.lock().unwrap_or_else(PoisonError::into_inner);
            open_ports.push(entry);
        }
        if let Some(callback) = &self.on_open {
            callback(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.open_ports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of everything recorded so far, ascending by port.
    ///
    /// Duplicates are kept next to each other.
    pub fn finalize(&self) -> ScanReport {
        let mut open_ports: Vec<OpenPort> = self
            .open_ports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        open_ports.sort_unstable_by_key(|open| open.port);

        ScanReport {
            open_ports,
            ..ScanReport::default()
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
