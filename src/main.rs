//! Holster - wallet lifecycle and environment management for bot tooling.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use holster::cli::output;
use holster::cli::{execute, Cli};
use holster::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("HOLSTER_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("holster=debug")
        } else {
            EnvFilter::new("holster=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.cwd) {
        let suggestion = match &e {
            Error::RotationRefused => Some("pass --yes to confirm the rotation"),
            Error::MissingSecrets => Some("run: holster ensure"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
