use assert_cmd::Command;
use predicates::prelude::*;

fn spendsense(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("spendsense").unwrap();
    // Settings, data dir and profiles all resolve under $HOME
    cmd.env("HOME", home);
    cmd
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("transactions"))
        .stdout(predicate::str::contains("invest"))
        .stdout(predicate::str::contains("profile"));
}

#[test]
fn init_creates_data_dirs() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("books");
    spendsense(home.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));
    assert!(data_dir.join("profiles").is_dir());
}

#[test]
fn profile_save_show_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .args([
            "profile", "save",
            "--mobile", "+919876543210",
            "--name", "Asha",
            "--email", "asha@example.com",
            "--picture", "file:///pics/asha.png",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"));

    spendsense(home.path())
        .args(["profile", "show", "--mobile", "+919876543210"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha"))
        .stdout(predicate::str::contains("asha@example.com"))
        .stdout(predicate::str::contains("file:///pics/asha.png"));
}

#[test]
fn profile_show_defaults_to_active_user() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .args([
            "profile", "save",
            "--mobile", "12345",
            "--name", "Ravi",
            "--email", "ravi@example.com",
        ])
        .assert()
        .success();

    // No --mobile: falls back to the user saved above
    spendsense(home.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi"));
}

#[test]
fn missing_profile_is_new_user_not_error() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .args(["profile", "show", "--mobile", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new user"));
}

#[test]
fn profile_update_and_delete() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .args([
            "profile", "save",
            "--mobile", "12345",
            "--name", "Asha",
            "--email", "old@example.com",
        ])
        .assert()
        .success();

    spendsense(home.path())
        .args([
            "profile", "update",
            "--mobile", "12345",
            "--email", "new@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("new@example.com"))
        .stdout(predicate::str::contains("Asha"));

    spendsense(home.path())
        .args(["profile", "delete", "--mobile", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    spendsense(home.path())
        .args(["profile", "show", "--mobile", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new user"));
}

#[test]
fn unreadable_workbook_prints_generic_notice() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("statement.xlsx");
    std::fs::write(&file, b"definitely not a workbook").unwrap();

    for view in ["import", "transactions", "chart"] {
        spendsense(home.path())
            .args([view, file.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Could not process that file."));
    }
}

#[test]
fn missing_workbook_prints_generic_notice() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .args(["import", "/no/such/statement.xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not process that file."));
}

#[test]
fn demo_walks_through_all_views() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample statement loaded."))
        .stdout(predicate::str::contains("Transactions"))
        .stdout(predicate::str::contains("Spending by category"))
        .stdout(predicate::str::contains("Mutual Funds"))
        .stdout(predicate::str::contains("Available for investment"));
}

#[test]
fn status_reports_settings() {
    let home = tempfile::tempdir().unwrap();
    spendsense(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data dir:"))
        .stdout(predicate::str::contains("Profiles:"));
}
