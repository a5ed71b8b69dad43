//! # Scan Target Model
//!
//! A resolved address together with the settings that stay fixed for the
//! lifetime of one scan.

use std::net::IpAddr;
use std::time::Duration;

use crate::config::Config;
use crate::error::ScanError;

/// Immutable per-scan configuration: where to connect, how long to wait
/// for each connection and how many probes may run at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTarget {
    addr: IpAddr,
    timeout: Duration,
    concurrency: usize,
}

impl ScanTarget {
    pub fn new(addr: IpAddr, timeout: Duration, concurrency: usize) -> Result<Self, ScanError> {
        if concurrency == 0 {
            return Err(ScanError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if timeout.is_zero() {
            return Err(ScanError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            addr,
            timeout,
            concurrency,
        })
    }

    pub fn from_config(addr: IpAddr, cfg: &Config) -> Result<Self, ScanError> {
        Self::new(addr, cfg.timeout, cfg.concurrency)
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
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
