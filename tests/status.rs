//! Environment resolution and validation integration tests.

mod support;
use support::{Test, DEAD_RPC_URL, KEY_ONE};

use predicates::prelude::*;

#[test]
fn ambient_variable_shadows_local_file() {
    let t = Test::new();
    t.write_local("RPC_URL=http://from-file:8545\n");

    let output = t
        .cmd()
        .args(["status", "--json"])
        .env("RPC_URL", "http://from-ambient:8545")
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["rpc_url"], "http://from-ambient:8545");
}

#[test]
fn local_file_shadows_shared_defaults() {
    let t = Test::new();
    t.write_env("API_KEY=shared\nRPC_URL=http://shared:8545\n");
    t.write_local("API_KEY=local\n");

    let payload = t.status_json();
    assert_eq!(payload["api_key_set"], true);
    assert_eq!(payload["rpc_url"], "http://shared:8545");
}

#[test]
fn schema_violation_names_the_field() {
    let t = Test::new();
    t.write_env("WALLET_ADDRESS=0x123\n");

    t.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WALLET_ADDRESS"))
        .stderr(predicate::str::contains("40 hex"));
}

#[test]
fn schema_violations_are_reported_together() {
    let t = Test::new();
    t.write_env("WALLET_ADDRESS=0x123\nRPC_URL=ftp://nope\n");

    let output = t.status(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WALLET_ADDRESS"));
    assert!(stderr.contains("RPC_URL"));
}

#[test]
fn strict_mode_names_every_missing_field() {
    let t = Test::new();

    let output = t.status(&["--strict"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    for field in ["RPC_URL", "PRIVATE_KEY", "WALLET_ADDRESS", "API_KEY"] {
        assert!(stderr.contains(field), "missing field {} not named", field);
    }
}

#[test]
fn strict_mode_passes_with_full_environment() {
    let t = Test::with_wallet();
    t.write_env(&format!("RPC_URL={}\nAPI_KEY=k\n", DEAD_RPC_URL));

    let output = t.status(&["--strict", "--json"]);
    assert!(
        output.status.success(),
        "strict status failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unreachable_node_degrades_to_unavailable_balance() {
    let t = Test::new();
    t.write_local(&format!("PRIVATE_KEY={}\n", KEY_ONE));
    t.ensure_json();
    t.write_env(&format!("RPC_URL={}\n", DEAD_RPC_URL));

    // Network trouble must not fail the command.
    let payload = t.status_json();
    assert!(payload["balance_wei"].is_null());
}

#[test]
fn status_reflects_provisioned_wallet() {
    let t = Test::with_wallet();

    let payload = t.status_json();
    assert_eq!(payload["private_key_set"], true);
    assert!(payload["wallet_address"]
        .as_str()
        .unwrap()
        .starts_with("0x"));
}
