//! Wallet lifecycle decisions.
//!
//! Given the resolved environment and the caller's intent, decide whether
//! to reuse, repair, provision, or rotate the wallet keypair. The asymmetry
//! between the two intents is the circuit breaker: the default `ensure`
//! intent can never discard an existing usable private key; only an
//! explicit `force` does.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::core::constants::{CREDENTIAL_FILE, PRIVATE_KEY, WALLET_ADDRESS};
use crate::core::env::Environment;
use crate::core::keys::KeyPairGenerator;
use crate::core::store;
use crate::error::Result;

/// Outcome of one lifecycle call. Ephemeral; only the two secret fields
/// are ever persisted, inside the credential file.
#[derive(Debug, Clone, Serialize)]
pub struct WalletMaterial {
    pub address: String,
    pub private_key: String,
    /// A new key was generated this call.
    pub created: bool,
    /// An existing key was deliberately discarded and replaced.
    /// Implies `created`.
    pub rotated: bool,
    /// The credential store was modified this call.
    pub wrote_env: bool,
}

/// Evaluate the lifecycle state machine and persist as needed.
///
/// | state on entry        | ensure    | force  |
/// |-----------------------|-----------|--------|
/// | key + address present | reuse     | rotate |
/// | only key present      | repair    | rotate |
/// | neither present       | provision | rotate |
///
/// Writes merge into the existing credential file, so unrelated keys the
/// operator put there pass through untouched. Read, decide, write is
/// strictly sequential; a failure before the write leaves the file as it
/// was.
pub fn ensure_wallet(
    cwd: &Path,
    force: bool,
    env: &Environment,
    keygen: &dyn KeyPairGenerator,
) -> Result<WalletMaterial> {
    let private_key = env.private_key();
    let address = env.wallet_address();

    if force {
        let (new_key, new_address) = keygen.generate()?;
        let wrote = persist(cwd, &new_key, &new_address)?;
        info!("rotated wallet keypair, new address {}", new_address);
        return Ok(WalletMaterial {
            address: new_address,
            private_key: new_key,
            created: true,
            rotated: true,
            wrote_env: wrote,
        });
    }

    match (private_key, address) {
        (Some(key), Some(addr)) => {
            info!("reusing existing wallet {}", addr);
            Ok(WalletMaterial {
                address: addr.to_string(),
                private_key: key.to_string(),
                created: false,
                rotated: false,
                wrote_env: false,
            })
        }
        (Some(key), None) => {
            // Address and key can desynchronize through manual edits.
            // Repair fills in the derived address and never touches the key.
            let derived = keygen.derive_address(key)?;
            let wrote = persist(cwd, key, &derived)?;
            info!("repaired wallet address {}", derived);
            Ok(WalletMaterial {
                address: derived,
                private_key: key.to_string(),
                created: false,
                rotated: false,
                wrote_env: wrote,
            })
        }
        (None, _) => {
            // A stored address without its key is unusable; provisioning
            // replaces it.
            let (new_key, new_address) = keygen.generate()?;
            let wrote = persist(cwd, &new_key, &new_address)?;
            info!("provisioned new wallet {}", new_address);
            Ok(WalletMaterial {
                address: new_address,
                private_key: new_key,
                created: true,
                rotated: false,
                wrote_env: wrote,
            })
        }
    }
}

/// Merge the secret fields into the credential file and rewrite it.
fn persist(cwd: &Path, private_key: &str, address: &str) -> Result<bool> {
    let path = cwd.join(CREDENTIAL_FILE);
    let mut vars = store::read(&path)?;
    vars.insert(PRIVATE_KEY.to_string(), private_key.to_string());
    vars.insert(WALLET_ADDRESS.to_string(), address.to_string());
    store::write(&path, &vars)
}
