use std::fmt;

use thiserror::Error;

/// A single offending field in a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Environment variable name (e.g. `PRIVATE_KEY`).
    pub field: String,
    /// What is wrong with it, or how to fix its absence.
    pub detail: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.detail)
    }
}

/// Render every issue on its own indented line so the operator sees the
/// full list, not just the first failure.
fn render_issues(issues: &[FieldIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        out.push_str("\n  - ");
        out.push_str(&issue.to_string());
    }
    out
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid environment:{}", render_issues(.0))]
    SchemaValidation(Vec<FieldIssue>),

    #[error("missing required environment:{}", render_issues(.0))]
    MissingRequired(Vec<FieldIssue>),

    #[error("rotation refused: discarding the current private key requires explicit confirmation")]
    RotationRefused,

    #[error("no wallet material: PRIVATE_KEY and WALLET_ADDRESS are not set")]
    MissingSecrets,

    #[error("keypair error: {0}")]
    Keygen(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validation_lists_every_field() {
        let err = Error::SchemaValidation(vec![
            FieldIssue::new("PRIVATE_KEY", "must be 0x followed by 64 hex characters"),
            FieldIssue::new("RPC_URL", "must be an http(s) URL"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("PRIVATE_KEY"));
        assert!(msg.contains("RPC_URL"));
    }
}
