//! Test support utilities for holster integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp working directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory holding .env / .env.local
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a wallet already provisioned.
    pub fn with_wallet() -> Self {
        let t = Self::new();
        let output = t.ensure();
        assert!(
            output.status.success(),
            "failed to provision wallet: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    pub fn env_path(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    pub fn local_path(&self) -> PathBuf {
        self.dir.path().join(".env.local")
    }

    /// Write the shared defaults file.
    pub fn write_env(&self, contents: &str) {
        fs::write(self.env_path(), contents).expect("failed to write .env");
    }

    /// Write the local override / credential file.
    pub fn write_local(&self, contents: &str) {
        fs::write(self.local_path(), contents).expect("failed to write .env.local");
    }

    /// Read the credential file verbatim.
    pub fn read_local(&self) -> String {
        fs::read_to_string(self.local_path()).expect("failed to read .env.local")
    }

    /// Parse the credential file into a map.
    pub fn local_vars(&self) -> BTreeMap<String, String> {
        self.read_local()
            .lines()
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
            .filter_map(|l| l.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect()
    }

    /// Credential file mode bits (Unix).
    #[cfg(unix)]
    pub fn local_mode(&self) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(self.local_path())
            .expect("failed to stat .env.local")
            .permissions()
            .mode()
            & 0o777
    }
}

impl Default for Test {
    fn default() -> Self {
        Self::new()
    }
}
