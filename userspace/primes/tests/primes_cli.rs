//! End-to-end tests: run the built binaries and check stdout and exit status.

use std::process::{Command, Output};

fn primes(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primes"))
        .args(args)
        .output()
        .expect("Failed to run primes")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn fifth_prime() {
    let output = primes(&["5"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "The 5th prime is: 11\n");
}

#[test]
fn first_prime_is_two() {
    let output = primes(&["1"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "The 1th prime is: 2\n");
}

#[test]
fn no_arguments_prints_usage() {
    let output = primes(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Usage: primes <n>\n");
}

#[test]
fn extra_arguments_print_usage() {
    let output = primes(&["5", "6"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Usage: primes <n>\n");
}

#[test]
fn non_digit_argument_fails() {
    let output = primes(&["3x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "Error: non-digit character in integer string\n"
    );
}

#[test]
fn non_digit_after_a_huge_prefix_fails_as_non_digit() {
    let output = primes(&["99999999999999999999x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "Error: non-digit character in integer string\n"
    );
}

#[test]
fn zero_index_fails() {
    let output = primes(&["0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Error: n must be at least 1\n");
}

#[test]
fn diagnostics_go_to_stderr() {
    let output = primes(&["12a3"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).lines().count(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[ WARN] libprimes::app: primes: non-digit byte 0x61 at position 2"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn fixed_variant_prints_the_thousandth_prime() {
    let output = Command::new(env!("CARGO_BIN_EXE_primes1000"))
        .output()
        .expect("Failed to run primes1000");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "The 1000th prime is: 7919\n");
}

#[test]
fn fixed_variant_ignores_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_primes1000"))
        .arg("17")
        .output()
        .expect("Failed to run primes1000");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "The 1000th prime is: 7919\n");
}
