//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a holster command scoped to the test directory.
    ///
    /// The four canonical variables are scrubbed from the inherited
    /// environment so the host machine never leaks into a test; tests that
    /// want ambient values set them explicitly on the returned command.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("holster").expect("failed to find holster binary");
        cmd.current_dir(self.dir.path());
        for key in ["RPC_URL", "PRIVATE_KEY", "WALLET_ADDRESS", "API_KEY"] {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Shortcut for `holster ensure`.
    pub fn ensure(&self) -> Output {
        self.cmd()
            .arg("ensure")
            .output()
            .expect("failed to run holster ensure")
    }

    /// Shortcut for `holster ensure --json`, parsed.
    pub fn ensure_json(&self) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["ensure", "--json"])
            .output()
            .expect("failed to run holster ensure --json");
        assert!(
            output.status.success(),
            "ensure failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("ensure --json output was not JSON")
    }

    /// Shortcut for `holster rotate --yes`.
    pub fn rotate_yes(&self) -> Output {
        self.cmd()
            .args(["rotate", "--yes"])
            .output()
            .expect("failed to run holster rotate --yes")
    }

    /// Rotate without confirmation (stdin is not a terminal under test).
    pub fn rotate_unconfirmed(&self) -> Output {
        self.cmd()
            .arg("rotate")
            .output()
            .expect("failed to run holster rotate")
    }

    /// Shortcut for `holster status` with extra args.
    pub fn status(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("status")
            .args(args)
            .output()
            .expect("failed to run holster status")
    }

    /// Shortcut for `holster status --json`, parsed. Panics on failure.
    pub fn status_json(&self) -> serde_json::Value {
        let output = self.status(&["--json"]);
        assert!(
            output.status.success(),
            "status failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("status --json output was not JSON")
    }

    /// Shortcut for `holster export` with extra args.
    pub fn export(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("export")
            .args(args)
            .output()
            .expect("failed to run holster export")
    }
}
