//! Status command - resolved environment and wallet overview.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::core::constants::{CREDENTIAL_FILE, ENV_FILE};
use crate::core::{balance, env};
use crate::error::Result;

/// Show the resolved environment, the wallet, and (fail-soft) its balance.
pub fn execute(
    cwd: &Path,
    ambient: &BTreeMap<String, String>,
    strict: bool,
    json: bool,
) -> Result<()> {
    let environment = env::resolve_validated(cwd, ambient, strict)?;

    let amount = environment
        .rpc_url()
        .zip(environment.wallet_address())
        .and_then(|(rpc_url, address)| balance::fetch(rpc_url, address));

    if json {
        let payload = json!({
            "rpc_url": environment.rpc_url(),
            "wallet_address": environment.wallet_address(),
            "private_key_set": environment.private_key().is_some(),
            "api_key_set": environment.api_key().is_some(),
            "balance_wei": amount.map(|b| b.wei.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    output::section("Holster Status");

    output::kv("directory", cwd.display());
    kv_file(cwd, ENV_FILE);
    kv_file(cwd, CREDENTIAL_FILE);

    output::kv("rpc url", environment.rpc_url().unwrap_or("not set"));
    output::kv(
        "address",
        environment.wallet_address().unwrap_or("not set"),
    );
    output::kv(
        "private key",
        environment
            .private_key()
            .map(output::redacted)
            .unwrap_or_else(|| "not set".to_string()),
    );
    output::kv(
        "api key",
        if environment.api_key().is_some() {
            "set"
        } else {
            "not set"
        },
    );

    match amount {
        Some(amount) => output::kv("balance", amount),
        None => output::kv("balance", "unavailable"),
    }

    if environment.private_key().is_none() {
        output::hint("run: holster ensure");
    }

    Ok(())
}

fn kv_file(cwd: &Path, name: &str) {
    let present = cwd.join(name).exists();
    output::kv(name, if present { "present" } else { "absent" });
}
