use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tally"))
}

/// Run `tally` with `args`, feeding `input` on stdin, isolated from the user's config.
fn run_with_input(args: &[&str], input: &str, config_home: &Path) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("TALLY_CONFIG")
        .env_remove("TALLY_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tally");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for tally")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_contacts_session_and_export() {
    let home = tempfile::tempdir().expect("config home");
    let exports = tempfile::tempdir().expect("export dir");
    let export_arg = exports.path().to_string_lossy().to_string();

    let input = "1\nLucía Ruiz\n630777888\nlucia@test.com\n1\nLu\n123\nbad\n5\n4\n8\n0\n";
    let output = run_with_input(
        &["--export-dir", export_arg.as_str(), "contacts"],
        input,
        home.path(),
    );
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("tally contacts\n"));
    assert!(out.contains("SUCCESS:\n  [ID: 4] Lucía Ruiz | Tel: 630777888 | Email: lucia@test.com"));
    assert!(out.contains("ERROR: The name must have at least 3 characters (got 2)"));
    assert!(out.contains("Contact 4 marked as favorite"));
    assert!(out.contains("status=ok"));
    assert!(out.contains("Goodbye!"));

    let exported = std::fs::read_to_string(exports.path().join("contacts_export.txt"))
        .expect("export file");
    assert!(exported.contains("[* ID: 4] Lucía Ruiz"));
    assert!(exported.ends_with("Total: 4\n"));
}

#[test]
fn test_eof_ends_menu_cleanly() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["tasks"], "1\nBuy bread\n", home.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("[ ] 1. Buy bread"));
}

#[test]
fn test_quiet_hides_menus() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["-q", "library"], "4\n0\n", home.path());
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("=== Library catalog ==="));
    assert!(out.contains("=== Available books ===\nSUCCESS:\n  - Cien años de soledad"));
}

#[test]
fn test_guess_with_fixed_secret() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["guess", "--secret", "37"], "50\n20\n37\nn\n", home.path());
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("The secret number is lower"));
    assert!(out.contains("The secret number is higher"));
    assert!(out.contains("Correct! You found it in 3 attempts"));
}

#[test]
fn test_calc_from_arguments() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["-q", "calc", "7", "/", "0"], "", home.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "=== Calculator ===\nERROR: Division by zero\n");
}

#[test]
fn test_greet_and_numbers() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["-q", "greet", "Ana", "--hour", "13"], "", home.path());
    assert_eq!(stdout(&output), "Good afternoon, Ana\n");

    let output = run_with_input(&["-q", "numbers", "2", "3", "4", "9"], "", home.path());
    let out = stdout(&output);
    assert!(out.contains("=== Primes ===\nSUCCESS:\n[2, 3]"));
}

#[test]
fn test_numbers_at_i64_limits() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(
        &["-q", "numbers", "9223372036854775807", "1", "--threshold", "0"],
        "",
        home.path(),
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("=== Sum of numbers greater than 0 ===\nERROR: Result out of range"));
    assert!(out.contains("=== Primes ===\nSUCCESS:\n[]"));
}

#[test]
fn test_config_export_dir_is_used() {
    let home = tempfile::tempdir().expect("config home");
    let exports = tempfile::tempdir().expect("export dir");
    let config_dir = home.path().join("tally");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[export]\ndir = \"{}\"\n", exports.path().display()),
    )
    .expect("write config");

    let output = run_with_input(&["-q", "text"], "5\n0\n", home.path());
    assert!(output.status.success());
    let analysis = std::fs::read_to_string(exports.path().join("text_analysis.txt"))
        .expect("analysis export");
    assert!(analysis.contains("Most frequent word: kotlin"));
}

#[test]
fn test_invalid_config_fails() {
    let home = tempfile::tempdir().expect("config home");
    let config_path = home.path().join("broken.toml");
    std::fs::write(&config_path, "[ui\n").expect("write config");
    let config_arg = config_path.to_string_lossy().to_string();

    let output = run_with_input(&["--config", config_arg.as_str(), "tasks"], "", home.path());
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("error=Failed to parse config"));
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().expect("config home");
    let output = run_with_input(&["completions", "bash"], "", home.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("tally"));
}
