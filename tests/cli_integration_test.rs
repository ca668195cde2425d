use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const UNSORTED: &str = indoc! {"
    export class Account {
        withdraw(amount: number) {}
        balance = 0;
        static open(): Account {
            return new Account();
        }
    }
"};

const SORTED: &str = indoc! {"
    export class Account {
        static open(): Account {
            return new Account();
        }

        balance = 0;

        withdraw(amount: number) {}
    }
"};

fn tidyclass(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tidyclass").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--plain");
    cmd
}

#[test]
fn test_sorts_every_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/account.ts"), UNSORTED).unwrap();
    fs::write(dir.path().join("src/sorted.ts"), SORTED).unwrap();

    let output = tidyclass(&dir).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sorted members in: 1 files"));
    assert_eq!(
        fs::read_to_string(dir.path().join("src/account.ts")).unwrap(),
        SORTED
    );
}

#[test]
fn test_single_file_already_sorted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("account.ts"), SORTED).unwrap();

    let output = tidyclass(&dir).arg("account.ts").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No changes needed."));
}

#[test]
fn test_single_file_is_sorted_and_saved() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("account.ts"), UNSORTED).unwrap();

    let output = tidyclass(&dir).arg("account.ts").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Sorted and saved: account.ts"));
    assert_eq!(
        fs::read_to_string(dir.path().join("account.ts")).unwrap(),
        SORTED
    );
}

#[test]
fn test_missing_single_file_fails() {
    let dir = TempDir::new().unwrap();

    let output = tidyclass(&dir).arg("missing.ts").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_check_mode_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("account.ts"), UNSORTED).unwrap();

    let output = tidyclass(&dir).arg("--check").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Would sort members in: 1 files"));
    assert_eq!(
        fs::read_to_string(dir.path().join("account.ts")).unwrap(),
        UNSORTED
    );
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("account.ts"), UNSORTED).unwrap();

    let output = tidyclass(&dir)
        .args(["--format", "json", "--no-parallel"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["changed"][0]["classes"][0], "Account");
    assert_eq!(summary["written"].as_array().unwrap().len(), 1);
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();

    let output = tidyclass(&dir).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No TypeScript files found"));
}

#[test]
fn test_init_then_reject_overloads_from_config() {
    let dir = TempDir::new().unwrap();
    tidyclass(&dir).arg("--init").assert().success();
    assert!(dir.path().join(".tidyclass.toml").exists());
    tidyclass(&dir).arg("--init").assert().failure();

    fs::write(
        dir.path().join("overloaded.ts"),
        indoc! {"
            class Parser {
                reset() {}
                parse(input: string): string;
                parse(input: any): any {
                    return input;
                }
            }
        "},
    )
    .unwrap();

    tidyclass(&dir).arg("--reject-overloads").assert().code(1);
}
