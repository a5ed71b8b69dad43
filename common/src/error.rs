use thiserror::Error;

/// Exit status used when the user interrupts a scan.
pub const EXIT_INTERRUPTED: u8 = 130;
/// Exit status used for every other fatal error.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that abort a scan as a whole.
///
/// Failures of individual probes are never represented here; they are
/// folded into a `ProbeOutcome` by the prober and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The port specification is malformed or out of range.
    #[error("invalid port specification '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// Concurrency or timeout settings are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The target host could not be turned into an address.
    #[error("could not resolve '{host}': {reason}")]
    ResolutionFailure { host: String, reason: String },

    /// The user asked the scan to stop before every batch ran.
    #[error("scan interrupted by user")]
    Interrupted,
}

impl ScanError {
    pub fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }

    pub fn resolution(host: &str, reason: impl Into<String>) -> Self {
        Self::ResolutionFailure {
            host: host.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit status the CLI should report for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_has_distinct_exit_code() {
        assert_eq!(ScanError::Interrupted.exit_code(), EXIT_INTERRUPTED);
        assert_eq!(
            ScanError::InvalidConfig("threads".into()).exit_code(),
            EXIT_FAILURE
        );
        assert_ne!(EXIT_INTERRUPTED, EXIT_FAILURE);
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = ScanError::invalid_spec("10-5", "range start is greater than its end");
        assert_eq!(
            err.to_string(),
            "invalid port specification '10-5': range start is greater than its end"
        );

        let err = ScanError::resolution("nowhere.invalid", "no addresses found");
        assert!(err.to_string().contains("nowhere.invalid"));
    }
}
