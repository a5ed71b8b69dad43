//! Static table of well-known TCP services.
//!
//! The table is read-only process-wide data; it is never mutated during a scan.

use crate::network::ports::Port;

const UNKNOWN: &str = "Unknown";

const WELL_KNOWN: &[(Port, &str)] = &[
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (443, "HTTPS"),
    (3306, "MySQL"),
    (3389, "RDP"),
];

/// Name of the service presumed to listen on a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Service(&'static str);

impl Service {
    /// Looks up `port`, falling back to `Unknown`.
    pub fn lookup(port: Port) -> Self {
        WELL_KNOWN
            .iter()
            .find(|(known, _)| *known == port)
            .map_or(Self(UNKNOWN), |&(_, name)| Self(name))
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is_known(&self) -> bool {
        self.0 != UNKNOWN
    }

    /// Every entry of the table, ordered by port.
    pub fn all() -> impl Iterator<Item = (Port, Service)> {
        WELL_KNOWN.iter().map(|&(port, name)| (port, Service(name)))
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
