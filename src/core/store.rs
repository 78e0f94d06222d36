//! Credential file read/write.
//!
//! The credential store is a single dotenv-style file (`.env.local`) owned
//! by the invoking process for the duration of one call. Writes are
//! deterministic (sorted keys, comment header, trailing blank line) and
//! always end by forcing the file mode to owner read/write only.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Parse a dotenv-style file into a map.
///
/// A missing file is an empty store, not an error. Comment lines (`#`) and
/// blank lines are skipped; values may be single- or double-quoted.
pub fn read(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(path)?;
    let mut vars = BTreeMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), value.to_string());
        }
    }

    Ok(vars)
}

/// Serialize and persist the credential map.
///
/// Keys are written in lexicographic order, one `KEY=value` line each.
/// Entries with empty values are dropped rather than written as `KEY=`.
/// Returns `true` to signal the file was touched.
///
/// Restricting the mode to 0600 is part of this function's contract, not a
/// best-effort follow-up: it runs unconditionally after every write, so a
/// pre-existing world-readable file comes out locked down.
pub fn write(path: &Path, vars: &BTreeMap<String, String>) -> Result<bool> {
    let mut out = String::new();
    out.push_str("# Managed by holster. Do not commit this file.\n");
    out.push_str(&format!("# owner: {}\n", whoami::username()));
    out.push_str(&format!(
        "# updated: {}\n",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));

    for (key, value) in vars {
        if value.is_empty() {
            continue;
        }
        out.push_str(&format!("{}={}\n", key, value));
    }
    out.push('\n');

    fs::write(path, out)?;
    restrict_permissions(path)?;

    debug!("wrote {} entries to {}", vars.len(), path.display());
    Ok(true)
}

/// Force owner read/write only (Unix).
///
/// Also used by the keystore export, which carries the same secrets.
pub fn restrict_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(
            path,
            fs::Permissions::from_mode(super::constants::CREDENTIAL_MODE),
        )?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
