//! Layered environment resolution and validation.
//!
//! An [`Environment`] is assembled fresh on every invocation from three
//! sources, highest precedence first:
//!
//! 1. ambient process variables (snapshotted once by the caller)
//! 2. the local override file (`.env.local`)
//! 3. the shared defaults file (`.env`)
//!
//! Shadowing is per key and whole-value: the highest-precedence source that
//! provides a non-empty value wins outright. Empty values count as absent
//! and never block a lower-precedence source from filling the key.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::core::constants::{
    API_KEY, CREDENTIAL_FILE, ENV_FILE, PRIVATE_KEY, RPC_URL, WALLET_ADDRESS,
};
use crate::core::store;
use crate::error::{Error, FieldIssue, Result};

/// Immutable view of the resolved configuration.
///
/// Unknown keys pass through untouched; validation only inspects the
/// canonical fields.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Build directly from a map. Mostly useful in tests; production code
    /// goes through [`resolve`].
    pub fn from_vars(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Look up a key, treating empty values as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn rpc_url(&self) -> Option<&str> {
        self.get(RPC_URL)
    }

    pub fn private_key(&self) -> Option<&str> {
        self.get(PRIVATE_KEY)
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.get(WALLET_ADDRESS)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.get(API_KEY)
    }

    /// Shape-check every canonical field that is present.
    ///
    /// Collects all offending fields before failing, so the operator fixes
    /// everything in one pass.
    pub fn validate_permissive(&self) -> Result<()> {
        let mut issues = Vec::new();

        if let Some(value) = self.rpc_url() {
            if !is_http_url(value) {
                issues.push(FieldIssue::new(
                    RPC_URL,
                    "must be a valid http:// or https:// URL",
                ));
            }
        }
        if let Some(value) = self.private_key() {
            if !is_prefixed_hex(value, 64) {
                issues.push(FieldIssue::new(
                    PRIVATE_KEY,
                    "must be 0x followed by 64 hex characters",
                ));
            }
        }
        if let Some(value) = self.wallet_address() {
            if !is_prefixed_hex(value, 40) {
                issues.push(FieldIssue::new(
                    WALLET_ADDRESS,
                    "must be 0x followed by 40 hex characters",
                ));
            }
        }
        // API_KEY only has to be non-empty, which `get` already enforces.

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::SchemaValidation(issues))
        }
    }

    /// Permissive checks plus presence of every required field.
    ///
    /// Strict never accepts an environment the permissive view rejects.
    pub fn validate_strict(&self) -> Result<()> {
        self.validate_permissive()?;

        let mut missing = Vec::new();
        for (key, hint) in [
            (RPC_URL, "set an http(s) JSON-RPC endpoint in .env or .env.local"),
            (PRIVATE_KEY, "run `holster ensure` to provision a wallet"),
            (WALLET_ADDRESS, "run `holster ensure` to provision a wallet"),
            (API_KEY, "set your provider API key in .env.local"),
        ] {
            if self.get(key).is_none() {
                missing.push(FieldIssue::new(key, hint));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired(missing))
        }
    }

    /// Iterate over all resolved key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Merge the three configuration sources for a working directory.
///
/// Pure read: never touches `std::env` and never mutates process state.
/// The ambient snapshot is taken once at the CLI boundary and passed in.
pub fn resolve(cwd: &Path, ambient: &BTreeMap<String, String>) -> Result<Environment> {
    let mut vars = BTreeMap::new();

    // Lowest precedence first; later layers overwrite earlier ones.
    merge_layer(&mut vars, store::read(&cwd.join(ENV_FILE))?);
    merge_layer(&mut vars, store::read(&cwd.join(CREDENTIAL_FILE))?);
    merge_layer(&mut vars, ambient.clone());

    debug!("resolved {} environment keys", vars.len());
    Ok(Environment::from_vars(vars))
}

/// Resolve and validate in one step.
pub fn resolve_validated(
    cwd: &Path,
    ambient: &BTreeMap<String, String>,
    strict: bool,
) -> Result<Environment> {
    let env = resolve(cwd, ambient)?;
    if strict {
        env.validate_strict()?;
    } else {
        env.validate_permissive()?;
    }
    Ok(env)
}

fn merge_layer(vars: &mut BTreeMap<String, String>, layer: BTreeMap<String, String>) {
    for (key, value) in layer {
        if value.is_empty() {
            continue;
        }
        vars.insert(key, value);
    }
}

fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn is_prefixed_hex(value: &str, hex_len: usize) -> bool {
    match value.strip_prefix("0x") {
        Some(rest) => rest.len() == hex_len && rest.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
