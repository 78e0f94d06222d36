//! Constants used throughout holster.
//!
//! Centralizes file names and the canonical environment field set.

/// Shared, possibly-committed defaults file (.env).
pub const ENV_FILE: &str = ".env";

/// Local override file; also the persisted credential file (.env.local).
///
/// Secrets are written here rather than to `.env` so they stay out of
/// version control and shadow the shared defaults on the next resolve.
pub const CREDENTIAL_FILE: &str = ".env.local";

/// JSON-RPC endpoint field.
pub const RPC_URL: &str = "RPC_URL";

/// Wallet private key field (0x + 64 hex chars).
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Wallet address field (0x + 40 hex chars).
pub const WALLET_ADDRESS: &str = "WALLET_ADDRESS";

/// Downstream API key field.
pub const API_KEY: &str = "API_KEY";

/// Fields the strict view requires to be present and non-empty.
pub const REQUIRED_KEYS: &[&str] = &[RPC_URL, PRIVATE_KEY, WALLET_ADDRESS, API_KEY];

/// Owner read/write only. Applied after every credential write.
#[cfg(unix)]
pub const CREDENTIAL_MODE: u32 = 0o600;

/// Default output path for the demo keystore export.
pub const KEYSTORE_FILE: &str = "keystore.json";
