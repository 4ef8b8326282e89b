use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_every_command() {
    Command::cargo_bin("craftops")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("players")
                .and(predicate::str::contains("playtime"))
                .and(predicate::str::contains("last-seen"))
                .and(predicate::str::contains("exec"))
                .and(predicate::str::contains("say"))
                .and(predicate::str::contains("grant"))
                .and(predicate::str::contains("revoke"))
                .and(predicate::str::contains("refresh"))
                .and(predicate::str::contains("daemon")),
        );
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    Command::cargo_bin("craftops")
        .unwrap()
        .arg("smite")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn bad_port_configuration_is_reported() {
    Command::cargo_bin("craftops")
        .unwrap()
        .env("CRAFTOPS_SSH_PORT", "not-a-port")
        .arg("players")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid CRAFTOPS_SSH_PORT"));
}
