// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use assert_cmd::Command;

fn pixel8_deploy() -> Command {
    Command::cargo_bin("pixel8-deploy").unwrap()
}

#[test]
fn help_lists_the_subcommands() {
    let assert = pixel8_deploy().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for subcommand in ["addresses", "codegen", "deploy", "verify"] {
        assert!(stdout.contains(subcommand), "missing {subcommand}");
    }
}

#[test]
fn addresses_work_offline_for_the_local_chain() {
    let assert = pixel8_deploy()
        .args(["addresses", "--chain", "local"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for contract in ["Pixel8", "Factory", "MintSwapPool", "GameStats"] {
        assert!(stdout.contains(contract), "missing {contract}");
    }
}

#[test]
fn addresses_are_stable_across_runs() {
    let run = || {
        let assert = pixel8_deploy()
            .args(["addresses", "--chain", "local"])
            .assert()
            .success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn unknown_chain_is_rejected() {
    pixel8_deploy()
        .args(["addresses", "--chain", "goerli"])
        .assert()
        .failure();
}

#[test]
fn missing_secrets_fail_before_any_network_call() {
    // no RPC endpoint is reachable in this test; the run must die on the
    // missing env var, not on a transport error
    pixel8_deploy()
        .args(["addresses", "--chain", "arbitrumSepolia"])
        .env_remove("PRIVATE_KEY")
        .env_remove("VERIFIER_API_KEY")
        .assert()
        .failure();
}
