//! Export command - plaintext demo keystore.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::output;
use crate::core::wallet::WalletMaterial;
use crate::core::{env, keystore};
use crate::error::{Error, Result};

/// Export the stored wallet secrets to a demo keystore file.
///
/// Requires both secrets to already exist; export never provisions.
pub fn execute(cwd: &Path, ambient: &BTreeMap<String, String>, out: &Path) -> Result<()> {
    let environment = env::resolve_validated(cwd, ambient, false)?;

    let (private_key, address) = match (environment.private_key(), environment.wallet_address()) {
        (Some(key), Some(address)) => (key.to_string(), address.to_string()),
        _ => return Err(Error::MissingSecrets),
    };

    let material = WalletMaterial {
        address,
        private_key,
        created: false,
        rotated: false,
        wrote_env: false,
    };

    let path = if out.is_absolute() {
        out.to_path_buf()
    } else {
        cwd.join(out)
    };
    keystore::export(&path, &material)?;

    output::success(&format!("exported keystore to {}", path.display()));
    output::warn(keystore::KEYSTORE_WARNING);

    Ok(())
}
