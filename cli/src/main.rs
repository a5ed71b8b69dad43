mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, scan, services};
use portr_common::ScanError;
use portr_common::config::Config;
use portr_common::error::EXIT_FAILURE;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    match run(commands).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_failure(&err)),
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    print::banner(commands.no_banner, commands.quiet);

    match commands.command {
        Commands::Scan(args) => {
            let mut cfg = Config::new(args.threads, args.timeout)?;
            cfg.quiet = commands.quiet;

            print::header("starting scanner", cfg.quiet);
            scan::scan(&args, &cfg).await?;
            if cfg.quiet == 0 {
                print::end_of_program();
            }
            Ok(())
        }
        Commands::Services => {
            print::header("well-known services", commands.quiet);
            services::services();
            Ok(())
        }
    }
}

/// Logs `err` once and picks the exit status.
fn report_failure(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ScanError>() {
        Some(ScanError::Interrupted) => {
            error!("Scan interrupted by user");
            ScanError::Interrupted.exit_code()
        }
        Some(scan_err) => {
            error!("{scan_err}");
            scan_err.exit_code()
        }
        None => {
            error!("{err:#}");
            EXIT_FAILURE
        }
    }
}
