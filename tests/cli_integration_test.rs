//! CLI integration tests
//!
//! None of these reach a database: DATABASE_URL names a backend the binary
//! has no driver for, so any connection attempt would fail the run.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const MENU: &str = "1- Report Patients Basic Information\n\
                    2- Report Doctors Basic Information\n\
                    3- Report Admissions Information\n\
                    4- Update Admissions Payment\n";

fn reporting() -> Command {
    let mut cmd = Command::cargo_bin("reporting").unwrap();
    cmd.env("DATABASE_URL", "postgres://localhost:5432/hospital")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_returns_exit_0() {
    reporting().arg("--help").assert().success();
}

#[test]
fn no_arguments_prints_usage() {
    reporting()
        .assert()
        .success()
        .stdout("reporting <username> <password>\n");
}

#[test]
fn one_argument_prints_usage() {
    reporting()
        .arg("alice")
        .assert()
        .success()
        .stdout("reporting <username> <password>\n");
}

#[test]
fn two_arguments_print_menu() {
    reporting()
        .args(["alice", "secret"])
        .assert()
        .success()
        .stdout(MENU);
}

#[test]
fn action_needs_a_driver_for_the_descriptor() {
    reporting()
        .args(["alice", "secret", "1"])
        .write_stdin("12345\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("no database driver for `postgres://localhost:5432/hospital`"));
}
