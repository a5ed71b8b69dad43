use std::time::Duration;

use crate::error::ScanError;

pub const DEFAULT_PORTS: &str = "1-1024";
pub const DEFAULT_CONCURRENCY: i64 = 100;
pub const DEFAULT_TIMEOUT_SECS: f64 = 1.0;

pub struct Config {
    /// Maximum number of probes in flight at once. Always at least 1.
    pub concurrency: usize,
    /// Upper bound for a single connection attempt.
    pub timeout: Duration,
    /// 0 prints everything, 1 hides decorations, 2 prints results only.
    pub quiet: u8,
}

impl Config {
    /// Builds a config from raw user input.
    pub fn new(concurrency: i64, timeout_secs: f64) -> Result<Self, ScanError> {
        Ok(Self {
            concurrency: concurrency_from(concurrency)?,
            timeout: timeout_from_secs(timeout_secs)?,
            quiet: 0,
        })
    }

    /// Re-checks fields that may have been set directly.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.concurrency == 0 {
            return Err(ScanError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ScanError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY as usize,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            quiet: 0,
        }
    }
}

pub fn concurrency_from(value: i64) -> Result<usize, ScanError> {
    if value < 1 {
        return Err(ScanError::InvalidConfig(format!(
            "concurrency must be a positive integer, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| ScanError::InvalidConfig(format!("concurrency {value} is too large")))
}

pub fn timeout_from_secs(secs: f64) -> Result<Duration, ScanError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ScanError::InvalidConfig(format!(
            "timeout must be a positive number of seconds, got {secs}"
        )));
    }
    let timeout = Duration::try_from_secs_f64(secs)
        .map_err(|e| ScanError::InvalidConfig(format!("timeout {secs}s: {e}")))?;

    if timeout.is_zero() {
        return Err(ScanError::InvalidConfig(format!(
            "timeout {secs}s rounds down to zero"
        )));
    }
    Ok(timeout)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
