//! Fail-soft balance lookup over JSON-RPC.
//!
//! The one place where failure means "information unavailable" rather than
//! an error: any transport, HTTP, or decode problem logs a warning and
//! yields `None`, so a flaky node never blocks wallet operations.

use std::fmt;
use std::time::Duration;

use serde_json::json;
use tracing::warn;

const RPC_TIMEOUT: Duration = Duration::from_secs(5);
const WEI_PER_ETH: f64 = 1e18;

/// An account balance in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub wei: u128,
}

impl Balance {
    pub fn eth(&self) -> f64 {
        self.wei as f64 / WEI_PER_ETH
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} ETH", self.eth())
    }
}

/// Fetch the balance of `address` from an `eth_getBalance` endpoint.
pub fn fetch(rpc_url: &str, address: &str) -> Option<Balance> {
    let client = match reqwest::blocking::Client::builder()
        .timeout(RPC_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("balance lookup unavailable: {}", e);
            return None;
        }
    };

    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "eth_getBalance",
        "params": [address, "latest"],
    });

    let response = match client.post(rpc_url).json(&body).send() {
        Ok(response) => response,
        Err(e) => {
            warn!("balance lookup failed: {}", e);
            return None;
        }
    };

    let payload: serde_json::Value = match response.json() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("balance response was not JSON: {}", e);
            return None;
        }
    };

    match payload.get("result").and_then(|v| v.as_str()) {
        Some(result) => match parse_wei(result) {
            Some(wei) => Some(Balance { wei }),
            None => {
                warn!("balance response had malformed quantity: {}", result);
                None
            }
        },
        None => {
            warn!("balance response missing result field: {}", payload);
            None
        }
    }
}

/// Decode a 0x-prefixed hex quantity.
fn parse_wei(quantity: &str) -> Option<u128> {
    let hex_part = quantity.strip_prefix("0x")?;
    u128::from_str_radix(hex_part, 16).ok()
}
