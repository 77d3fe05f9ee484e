//! E2E tests for the `sortproof` binary: traces and input validation.
//!
//! Traces go to stdout; errors and logs go to stderr.

mod common;

use common::sortproof_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

// ─── Traces ────────────────────────────────────────────────────────

#[test]
fn insertion_trace_text() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "insertion", "3,1,2"])
        .assert()
        .success()
        .stdout(
            "Insertion sort (ascending)\n\
             Step 1: 3 |   1   2\n\
             Step 2: 3   1 |   2\n\
             Step 3: 1   3 |   2\n\
             Step 4: 1   3   2 |\n\
             Step 5: 1   2   3 |\n",
        );
}

#[test]
fn selection_equal_values_descending() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["--order", "desc", "--algorithm", "selection", "5,5,5"])
        .assert()
        .success()
        .stdout(
            "Selection sort (descending)\n\
             Step 1: 5 |   5   5\n\
             Step 2: 5   5 |   5\n\
             Step 3: 5   5   5 |\n",
        );
}

#[test]
fn bubble_letters_with_iteration_labels() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "bubble", "C, A, B"])
        .assert()
        .success()
        .stdout(contains("Bubble sort (ascending)"))
        .stdout(contains("Step 3: A B (C) -> Iteration 1"))
        .stdout(contains("Step 6: A B (C) -> Iteration 2"))
        .stdout(contains("Step 7").not());
}

#[test]
fn selectors_are_case_insensitive() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "DESC", "-a", "Bubble", "1,2"])
        .assert()
        .success()
        .stdout(contains("Bubble sort (descending)"));
}

#[test]
fn input_from_stdin() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "insertion"])
        .write_stdin("3,1,2\n")
        .assert()
        .success()
        .stdout(contains("Step 5: 1   2   3 |"));
}

#[test]
fn negative_numbers_after_separator() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "selection", "--", "-3,4,-10,0"])
        .assert()
        .success()
        .stdout(contains("-10   -3   0   4 |"));
}

#[test]
fn plain_output_when_piped() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "selection", "2,1"])
        .assert()
        .success()
        .stdout(contains("\x1B[").not());
}

// ─── Validation ────────────────────────────────────────────────────

#[test]
fn empty_input_is_rejected() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "insertion", " , "])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Input cannot be empty."));
}

#[test]
fn empty_stdin_is_rejected() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "insertion"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Input cannot be empty."));
}

#[test]
fn missing_order() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-a", "insertion", "1,2"])
        .assert()
        .failure()
        .stderr(contains("Please select an arrangement."));
}

#[test]
fn missing_algorithm() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "1,2"])
        .assert()
        .failure()
        .stderr(contains("Please select a sorting algorithm."));
}

#[test]
fn unknown_algorithm() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "quick", "1,2"])
        .assert()
        .failure()
        .stderr(contains("unknown algorithm 'quick'"));
}

#[test]
fn unrecognized_value() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.args(["-o", "asc", "-a", "bubble", "3,AB,1"])
        .assert()
        .failure()
        .stderr(contains(
            "Unrecognized value 'AB': expected an integer or a single uppercase letter.",
        ));
}

#[test]
fn version_flag() {
    let (mut cmd, _guard) = sortproof_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(contains("sortproof"));
}
