//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive passphrase prompts are bypassed by setting
//! `PASSVAULT_PASSWORD` (and `PASSVAULT_BACKUP_PASSWORD` for backup
//! commands), the same escape hatch scripts and CI use.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Iteration floor — keeps test-suite unlocks fast.
const FAST_ITERATIONS: &str = "100000";

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: initialize a vault at `<dir>/test.vault` with the given passphrase.
fn init_vault(dir: &TempDir, passphrase: &str) -> std::path::PathBuf {
    let vault = dir.path().join("test.vault");
    passvault()
        .args([
            "init",
            "--iterations",
            FAST_ITERATIONS,
            "--vault",
            vault.to_str().unwrap(),
        ])
        .current_dir(dir.path())
        .env("PASSVAULT_PASSWORD", passphrase)
        .assert()
        .success();
    vault
}

// ---------------------------------------------------------------------------
// Smoke tests
// ---------------------------------------------------------------------------

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("restore"))
        .stdout(predicate::str::contains("change-password"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_usage() {
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let output = passvault()
        .args(["generate", "--length", "20"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let password = String::from_utf8(output).expect("utf8");
    assert_eq!(password.trim_end().len(), 20);
}

// ---------------------------------------------------------------------------
// Vault lifecycle through the binary
// ---------------------------------------------------------------------------

#[test]
fn init_creates_vault_file() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "integration-pass");
    assert!(vault.exists());
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "integration-pass");

    passvault()
        .args([
            "init",
            "--iterations",
            FAST_ITERATIONS,
            "--vault",
            vault.to_str().unwrap(),
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_then_list_then_show() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "integration-pass");
    let vault_arg = vault.to_str().unwrap();

    passvault()
        .args([
            "add", "github", "--username", "octocat", "--generate", "--vault", vault_arg,
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"));

    passvault()
        .args(["list", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("octocat"));

    passvault()
        .args(["show", "github", "--reveal", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("Password:"));
}

#[test]
fn delete_removes_credential() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "integration-pass");
    let vault_arg = vault.to_str().unwrap();

    passvault()
        .args(["add", "doomed", "--generate", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success();

    passvault()
        .args(["delete", "doomed", "--force", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success();

    passvault()
        .args(["show", "doomed", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "right-passphrase");

    passvault()
        .args(["list", "--vault", vault.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "wrong-passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn stats_reports_totals() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "integration-pass");
    let vault_arg = vault.to_str().unwrap();

    passvault()
        .args(["add", "one", "--generate", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success();

    passvault()
        .args(["stats", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "integration-pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials:      1"));
}

// ---------------------------------------------------------------------------
// Backup and restore through the binary
// ---------------------------------------------------------------------------

#[test]
fn backup_and_restore_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let vault = init_vault(&tmp, "live-passphrase");
    let vault_arg = vault.to_str().unwrap();
    let backup = tmp.path().join("export.vbak");

    passvault()
        .args(["add", "carried", "--generate", "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "live-passphrase")
        .assert()
        .success();

    passvault()
        .args(["backup", backup.to_str().unwrap(), "--vault", vault_arg])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "live-passphrase")
        .env("PASSVAULT_BACKUP_PASSWORD", "backup-passphrase")
        .assert()
        .success();
    assert!(backup.exists());

    // Restore into a brand-new vault with a different master passphrase.
    let second = tmp.path().join("second.vault");
    passvault()
        .args([
            "init",
            "--iterations",
            FAST_ITERATIONS,
            "--vault",
            second.to_str().unwrap(),
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "other-passphrase")
        .assert()
        .success();

    passvault()
        .args([
            "restore",
            backup.to_str().unwrap(),
            "--vault",
            second.to_str().unwrap(),
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "other-passphrase")
        .env("PASSVAULT_BACKUP_PASSWORD", "backup-passphrase")
        .assert()
        .success();

    passvault()
        .args(["list", "--vault", second.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "other-passphrase")
        .assert()
        .success()
        .stdout(predicate::str::contains("carried"));
}
