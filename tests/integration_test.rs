//! Integration tests for the notequery CLI using fixture vaults.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Build a throwaway vault with a few notes.
fn fixture_vault() -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    write_note(
        dir.path(),
        "Projects/Roadmap.md",
        "# Roadmap\n\nPlanning the q3 roadmap with the team.\n",
    );
    write_note(
        dir.path(),
        "Meetings/Standup.md",
        "# Standup\n\nDaily standup meeting notes. #meeting\n",
    );
    write_note(
        dir.path(),
        "Archive/Old Plan.md",
        "# Old Plan\n\nArchived planning notes.\n",
    );
    write_note(dir.path(), "Scratch.txt", "planning in a plain text file\n");
    dir
}

fn write_note(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Run the notequery CLI and return (stdout, stderr, exit code).
fn run_notequery(args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_notequery");

    let output = Command::new(binary)
        .args(args)
        .output()
        .expect("Failed to execute notequery");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the notequery CLI with the given stdin content.
fn run_notequery_stdin(args: &[&str], stdin_content: &str) -> (String, i32) {
    let binary = env!("CARGO_BIN_EXE_notequery");

    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn notequery");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin_content.as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("Failed to wait on notequery");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, code)
}

mod parse_command {
    use super::*;

    #[test]
    fn parse_prints_element_sequence() {
        let (stdout, _, code) = run_notequery(&["parse", "\"a b\" & !c"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"type\": \"term\""));
        assert!(stdout.contains("\"type\": \"operator\""));
        assert!(stdout.contains("\"op\": \"and\""));
        assert!(stdout.contains("\"negated\": true"));
        assert!(stdout.contains("\"total\": 3"));
    }

    #[test]
    fn parse_yaml_output() {
        let (stdout, _, code) = run_notequery(&["--yaml", "parse", "a | b"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("elements:"));
        assert!(stdout.contains("op: or"));
    }

    #[test]
    fn parse_unmatched_quote_fails() {
        let (_, stderr, code) = run_notequery(&["parse", "\"unterminated"]);
        assert_eq!(code, 2);
        assert!(stderr.contains("Unmatched quote"));
    }

    #[test]
    fn parse_consecutive_operators_fail() {
        let (_, stderr, code) = run_notequery(&["parse", "a && b"]);
        assert_eq!(code, 2);
        assert!(stderr.contains("Consecutive operators are not allowed"));
    }

    #[test]
    fn parse_quiet_suppresses_error_message() {
        let (_, stderr, code) = run_notequery(&["--quiet", "parse", "a && b"]);
        assert_eq!(code, 2);
        assert!(stderr.is_empty());
    }
}

mod filter_command {
    use super::*;

    #[test]
    fn filter_matches_note_content() {
        let vault = fixture_vault();
        let vault_path = vault.path().to_str().unwrap();

        let (stdout, _, code) =
            run_notequery(&["filter", "planning & !archived", "--vault", vault_path]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 1"));
        assert!(stdout.contains("Projects/Roadmap.md"));
        assert!(!stdout.contains("Old Plan"));
    }

    #[test]
    fn filter_or_query() {
        let vault = fixture_vault();
        let vault_path = vault.path().to_str().unwrap();

        let (stdout, _, code) =
            run_notequery(&["filter", "standup | roadmap", "--vault", vault_path]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 2"));
        assert!(stdout.contains("Standup.md"));
        assert!(stdout.contains("Roadmap.md"));
    }

    #[test]
    fn filter_skips_non_note_extensions() {
        let vault = fixture_vault();
        let vault_path = vault.path().to_str().unwrap();

        let (stdout, _, code) = run_notequery(&["filter", "planning", "--vault", vault_path]);
        assert_eq!(code, 0);
        assert!(!stdout.contains("Scratch.txt"));
    }

    #[test]
    fn filter_quoted_phrase() {
        let vault = fixture_vault();
        let vault_path = vault.path().to_str().unwrap();

        let (stdout, _, code) =
            run_notequery(&["filter", "\"meeting notes\"", "--vault", vault_path]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 1"));
        assert!(stdout.contains("Standup.md"));
    }

    #[test]
    fn filter_missing_vault_fails() {
        let (_, stderr, code) = run_notequery(&["filter", "x", "--vault", "/no/such/dir"]);
        assert_eq!(code, 3);
        assert!(stderr.contains("Vault not found"));
    }

    #[test]
    fn filter_invalid_query_fails_before_scanning() {
        let vault = fixture_vault();
        let vault_path = vault.path().to_str().unwrap();

        let (_, stderr, code) = run_notequery(&["filter", "a | | b", "--vault", vault_path]);
        assert_eq!(code, 2);
        assert!(stderr.contains("Consecutive operators"));
    }
}

mod match_command {
    use super::*;

    #[test]
    fn match_reports_per_file_results() {
        let vault = fixture_vault();
        let roadmap = vault.path().join("Projects/Roadmap.md");
        let standup = vault.path().join("Meetings/Standup.md");

        let (stdout, _, code) = run_notequery(&[
            "match",
            "roadmap",
            roadmap.to_str().unwrap(),
            standup.to_str().unwrap(),
        ]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 1"));
        assert!(stdout.contains("\"matched\": true"));
        assert!(stdout.contains("\"matched\": false"));
    }

    #[test]
    fn match_stdin_echoes_matching_lines() {
        let input = "alpha line\nbeta line\nalpha and beta\n";
        let (stdout, code) = run_notequery_stdin(&["match", "alpha & !beta"], input);
        assert_eq!(code, 0);
        assert_eq!(stdout, "alpha line\n");
    }

    #[test]
    fn match_stdin_case_insensitive() {
        let input = "ALPHA shouting\nquiet beta\n";
        let (stdout, code) = run_notequery_stdin(&["match", "alpha"], input);
        assert_eq!(code, 0);
        assert_eq!(stdout, "ALPHA shouting\n");
    }

    #[test]
    fn match_missing_file_fails() {
        let (_, stderr, code) = run_notequery(&["match", "x", "/no/such/file.md"]);
        assert_eq!(code, 1);
        assert!(!stderr.is_empty());
    }
}
