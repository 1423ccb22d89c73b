//! Command-line tests for the vanity-forge binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new(words: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("words.txt"), words).unwrap();
        Self { dir }
    }

    fn store_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("callers")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vanity-forge").unwrap();
        cmd.current_dir(self.dir.path())
            .env("WORD_PROVIDER", "none")
            .env("VANITY_DICTIONARY_PATH", self.dir.path().join("words.txt"))
            .env("VANITY_STORE_DIR", self.store_dir())
            .env("RUST_LOG", "off");
        cmd
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }
}

fn stored_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

#[test]
fn test_help() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}

#[test]
fn test_missing_phone_is_usage_error() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("phone number"));
}

#[test]
fn test_search_prints_results_and_persists() {
    let sandbox = Sandbox::new("dog\nfact\ncat\n");
    sandbox
        .cmd()
        .args(["+1 (800) 945-3228", "--category", "general"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"topResult1\": \"8 0 0 9 4 5 FACT\""))
        .stdout(predicate::str::contains("\"usedFallback\": true"))
        .stdout(predicate::str::contains("\"hasVanityResults\": true"));

    assert_eq!(stored_files(&sandbox.store_dir()), 1);

    sandbox
        .cmd()
        .args(["+1 (800) 945-3228", "--validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"previousTopResult\": \"8 0 0 9 4 5 FACT\""));
}

#[test]
fn test_validate_unknown_caller() {
    let sandbox = Sandbox::new("fact\n");
    sandbox
        .cmd()
        .args(["5551234567", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
    assert_eq!(stored_files(&sandbox.store_dir()), 0);
}

#[test]
fn test_event_file() {
    let sandbox = Sandbox::new("pets\n");
    let event = r#"{
        "Details": {
            "ContactData": {
                "Attributes": { "Category": "pet" },
                "CustomerEndpoint": { "Address": "+18009457387" }
            }
        }
    }"#;
    std::fs::write(sandbox.path("event.json"), event).unwrap();

    sandbox
        .cmd()
        .args(["--event", "event.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 0 0 9 4 5 PETS"));
}

#[test]
fn test_bad_event_file() {
    let sandbox = Sandbox::new("");
    std::fs::write(sandbox.path("event.json"), "not json").unwrap();
    sandbox
        .cmd()
        .args(["--event", "event.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid event JSON"));
}

#[test]
fn test_bad_configuration() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .env("VANITY_RESULT_CAP", "many")
        .arg("5551234567")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("VANITY_RESULT_CAP"));
}
