pub mod scan;
pub mod services;

use clap::{ArgAction, Parser, Subcommand};
use portr_common::config::{DEFAULT_CONCURRENCY, DEFAULT_PORTS, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "portr")]
#[command(about = "A concurrent TCP connect scanner.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat for results only (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the ports of a single host
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// List the well-known services recognised by port number
    #[command(alias = "ls")]
    Services,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Target IP address or host name
    pub target: String,

    /// Port range (e.g. 1-1000) or list (e.g. 22,80,443)
    #[arg(short, long, default_value = DEFAULT_PORTS)]
    pub ports: String,

    /// Maximum number of probes in flight
    #[arg(short = 'T', long, default_value_t = DEFAULT_CONCURRENCY, allow_negative_numbers = true)]
    pub threads: i64,

    /// Connection timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, allow_negative_numbers = true)]
    pub timeout: f64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
