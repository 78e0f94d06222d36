//! Rotate command - destructive keypair replacement.
//!
//! The lifecycle core never refuses a force request; the gate lives here.
//! Rotation proceeds only with `--yes` or an interactive confirmation, and
//! anything less surfaces `RotationRefused`.

use std::collections::BTreeMap;
use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Confirm;

use crate::cli::output;
use crate::core::keys::Secp256k1Generator;
use crate::core::{env, wallet};
use crate::error::{Error, Result};

/// Execute a forced rotation.
pub fn execute(cwd: &Path, ambient: &BTreeMap<String, String>, yes: bool) -> Result<()> {
    let environment = env::resolve_validated(cwd, ambient, false)?;
    let previous = environment.wallet_address().map(str::to_string);

    if !confirmed(yes, previous.as_deref())? {
        return Err(Error::RotationRefused);
    }

    output::section("Key Rotation");

    output::progress("Generating new keypair");
    let material = wallet::ensure_wallet(cwd, true, &environment, &Secp256k1Generator)?;
    output::progress_done(true);

    if let Some(old) = previous {
        output::kv("old address", old);
    }
    output::kv("new address", &material.address);
    output::kv("private key", output::redacted(&material.private_key));

    println!();
    output::success("rotation complete");
    output::hint("fund the new address before trading; the old key is gone");

    Ok(())
}

/// Explicit opt-in check. Non-interactive callers must pass `--yes`.
fn confirmed(yes: bool, previous: Option<&str>) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        output::error("rotation is destructive and needs --yes in non-interactive mode");
        return Ok(false);
    }

    let prompt = match previous {
        Some(address) => format!(
            "This permanently discards the private key for {}. Continue?",
            address
        ),
        None => "This discards any existing private key. Continue?".to_string(),
    };

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
