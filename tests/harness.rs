// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios (§8 "Concrete end-to-end scenarios"), each run as
//! a real subprocess against one of the `fixture-scenario-*` bin targets
//! so the test covers actual `fork()`/`waitpid()`/timeout behavior rather
//! than a simulation of it.

use std::process::{Command, Output};

fn run_fixture(name: &str) -> Output {
    let exe = std::env::var(format!("CARGO_BIN_EXE_{name}"))
        .unwrap_or_else(|_| panic!("missing CARGO_BIN_EXE_ for fixture {name}"));
    Command::new(exe).output().expect("failed to run fixture")
}

#[test]
fn scenario_1_true_assertion_earns_all_points() {
    let out = run_fixture("fixture-scenario-pass");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Tests: 1/1 [Failed 0 test(s)]"));
    assert!(stdout.contains("Points: 16/16"));
    assert!(stdout.contains("Assertions: 1/1"));
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn scenario_2_second_assertion_fails_first_passes() {
    let out = run_fixture("fixture-scenario-one-fail");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL: b"));
    assert!(stdout.contains("Tests: 0/1 [Failed 1 test(s)]"));
    assert!(stdout.contains("Points: 0/8"));
    assert!(stdout.contains("Assertions: 1/2"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn scenario_3_first_assertion_fails_second_passes() {
    let out = run_fixture("fixture-scenario-other-fail");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL: a"));
    assert!(stdout.contains("Tests: 0/1 [Failed 1 test(s)]"));
    assert!(stdout.contains("Points: 0/4"));
    assert!(stdout.contains("Assertions: 1/2"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn scenario_4_segfault_is_credited_as_failure_not_a_crash() {
    let out = run_fixture("fixture-scenario-segfault");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("failed to run"));
    assert!(stdout.contains("Tests: 0/1 [Failed 1 test(s)]"));
    assert!(stdout.contains("Points: 0/2"));
    assert!(stdout.contains("Assertions: 0/0"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn scenario_5_timeout_is_credited_as_failure() {
    let out = run_fixture("fixture-scenario-timeout");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("exceeded the time limit of 100ms"));
    assert!(stdout.contains("Tests: 0/1 [Failed 1 test(s)]"));
    assert!(stdout.contains("Points: 0/1"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn scenario_6_sibling_blocks_aggregate_independently() {
    let out = run_fixture("fixture-scenario-siblings");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Tests: 1/2 [Failed 1 test(s)]"));
    assert!(stdout.contains("Points: 10/20"));
    assert_eq!(out.status.code(), Some(1));
}
