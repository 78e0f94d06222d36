//! Command-line interface.

pub mod balance;
pub mod completions;
pub mod ensure;
pub mod export;
pub mod output;
pub mod rotate;
pub mod status;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;

/// Holster - wallet lifecycle and environment management for bot tooling.
#[derive(Parser)]
#[command(
    name = "holster",
    about = "Wallet lifecycle and environment management for bot tooling",
    version,
    after_help = "Draw only when you mean it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Working directory holding .env and .env.local
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub cwd: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Make sure a wallet exists; never discards an existing key
    Ensure {
        /// Print the resulting wallet material as JSON
        #[arg(long)]
        json: bool,
    },

    /// Discard the current keypair and generate a new one (destructive)
    Rotate {
        /// Skip the interactive confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the resolved environment and wallet state
    Status {
        /// Require all canonical fields to be present
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the wallet balance over JSON-RPC
    Balance {
        /// Address to query (defaults to the stored wallet address)
        address: Option<String>,
    },

    /// Export wallet secrets to a plaintext demo keystore
    Export {
        /// Output path
        #[arg(short, long, default_value = crate::core::constants::KEYSTORE_FILE)]
        out: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Dispatch a parsed command.
///
/// The ambient environment is snapshotted exactly once here and passed down
/// as an immutable map; nothing below this reads `std::env`.
pub fn execute(command: Command, cwd: &Path) -> Result<()> {
    let ambient: BTreeMap<String, String> = std::env::vars().collect();

    match command {
        Command::Ensure { json } => ensure::execute(cwd, &ambient, json),
        Command::Rotate { yes } => rotate::execute(cwd, &ambient, yes),
        Command::Status { strict, json } => status::execute(cwd, &ambient, strict, json),
        Command::Balance { address } => balance::execute(cwd, &ambient, address),
        Command::Export { out } => export::execute(cwd, &ambient, &out),
        Command::Completions { shell } => completions::execute(shell),
    }
}
