//! Test fixtures and constants.

/// secp256k1 private key 0x...01; its address is a fixed, well-known value.
pub const KEY_ONE: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";

/// Address derivable from [`KEY_ONE`].
pub const KEY_ONE_ADDRESS: &str = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf";

/// A private key that fails shape validation (too short).
pub const BAD_PRIVATE_KEY: &str = "0xdeadbeef";

/// Loopback discard port: connections are refused immediately, which keeps
/// fail-soft balance tests fast.
pub const DEAD_RPC_URL: &str = "http://127.0.0.1:9/";
