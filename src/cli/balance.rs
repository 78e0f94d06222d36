//! Balance command - fail-soft lookup for the stored or a given address.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::output;
use crate::core::{balance, env};
use crate::error::{Error, Result};

pub fn execute(
    cwd: &Path,
    ambient: &BTreeMap<String, String>,
    address: Option<String>,
) -> Result<()> {
    let environment = env::resolve_validated(cwd, ambient, false)?;

    let address = match address.or_else(|| environment.wallet_address().map(str::to_string)) {
        Some(address) => address,
        None => return Err(Error::MissingSecrets),
    };

    let Some(rpc_url) = environment.rpc_url() else {
        output::warn("RPC_URL is not configured");
        output::hint("set an http(s) endpoint in .env or .env.local");
        return Ok(());
    };

    match balance::fetch(rpc_url, &address) {
        Some(amount) => {
            output::kv("address", &address);
            output::kv("balance", amount);
        }
        // Network trouble is information-unavailable, never a hard error.
        None => output::dimmed("balance unavailable (node unreachable or slow)"),
    }

    Ok(())
}
