//! Demo keystore export.
//!
//! Serializes wallet secrets to a plaintext JSON file for quick inspection
//! and tooling handoff. This format is deliberately not a custody format:
//! the private key is stored unencrypted and the file says so.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::store;
use crate::core::wallet::WalletMaterial;
use crate::error::Result;

/// Marker embedded in every export.
pub const KEYSTORE_WARNING: &str =
    "plaintext demo keystore; NOT suitable for production custody";

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoKeystore {
    pub version: u32,
    pub warning: String,
    pub address: String,
    pub private_key: String,
    pub exported_at: String,
}

impl DemoKeystore {
    pub fn from_material(material: &WalletMaterial) -> Self {
        Self {
            version: 1,
            warning: KEYSTORE_WARNING.to_string(),
            address: material.address.clone(),
            private_key: material.private_key.clone(),
            exported_at: chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }
}

/// Write the keystore file. Same owner-only mode as the credential file,
/// since it carries the same secrets.
pub fn export(path: &Path, material: &WalletMaterial) -> Result<()> {
    let keystore = DemoKeystore::from_material(material);
    let mut json = serde_json::to_string_pretty(&keystore)?;
    json.push('\n');

    fs::write(path, json)?;
    store::restrict_permissions(path)?;

    Ok(())
}
