//! Ensure command - reuse, repair, or provision the wallet.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::output;
use crate::core::constants::CREDENTIAL_FILE;
use crate::core::keys::Secp256k1Generator;
use crate::core::{balance, env, wallet};
use crate::error::Result;

/// Ensure a wallet exists for this working directory.
///
/// Default intent: never discards an existing usable private key.
pub fn execute(cwd: &Path, ambient: &BTreeMap<String, String>, json: bool) -> Result<()> {
    // Validation completes before any lifecycle write.
    let environment = env::resolve_validated(cwd, ambient, false)?;
    let material = wallet::ensure_wallet(cwd, false, &environment, &Secp256k1Generator)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&material)?);
        return Ok(());
    }

    let action = if material.created {
        "provisioned new wallet"
    } else if material.wrote_env {
        "repaired wallet address"
    } else {
        "wallet ready"
    };
    output::success(action);
    output::kv("address", &material.address);
    output::kv("private key", output::redacted(&material.private_key));
    if material.wrote_env {
        output::kv("credentials", CREDENTIAL_FILE);
    }

    if let Some(rpc_url) = environment.rpc_url() {
        match balance::fetch(rpc_url, &material.address) {
            Some(amount) => output::kv("balance", amount),
            None => output::dimmed("  balance unavailable"),
        }
    }

    Ok(())
}
