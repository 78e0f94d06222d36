//! Keypair generation and address derivation.
//!
//! The lifecycle manager consumes this through the [`KeyPairGenerator`]
//! trait so tests can inject a deterministic implementation. The production
//! implementation is secp256k1 with the usual Keccak-256 address scheme.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Injected keypair capability.
pub trait KeyPairGenerator {
    /// Produce a fresh random keypair as `(private_key, address)`,
    /// both 0x-prefixed lowercase hex.
    fn generate(&self) -> Result<(String, String)>;

    /// Derive the address deterministically from a private key.
    fn derive_address(&self, private_key: &str) -> Result<String>;
}

/// secp256k1 keypair generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Generator;

impl KeyPairGenerator for Secp256k1Generator {
    fn generate(&self) -> Result<(String, String)> {
        let signing_key = SigningKey::random(&mut OsRng);
        let secret = Zeroizing::new(signing_key.to_bytes());
        let private_key = format!("0x{}", hex::encode(secret.as_slice()));
        let address = address_of(&signing_key);
        Ok((private_key, address))
    }

    fn derive_address(&self, private_key: &str) -> Result<String> {
        let hex_part = private_key
            .strip_prefix("0x")
            .ok_or_else(|| Error::Keygen("private key must start with 0x".to_string()))?;

        let bytes = Zeroizing::new(
            hex::decode(hex_part)
                .map_err(|e| Error::Keygen(format!("private key is not valid hex: {}", e)))?,
        );

        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|e| Error::Keygen(format!("invalid secp256k1 private key: {}", e)))?;

        Ok(address_of(&signing_key))
    }
}

/// Last 20 bytes of Keccak-256 over the uncompressed public key,
/// skipping the 0x04 SEC1 tag byte.
fn address_of(key: &SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    let digest = Keccak256::digest(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(&digest[12..]))
}
