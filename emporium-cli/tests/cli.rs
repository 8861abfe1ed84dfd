use std::io::Write;
use std::process::{Command, Output, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "emporium-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_potion-emporium");
    let mut child = Command::new(exe)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    // The process may exit before draining stdin (e.g. on a config error).
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("run cli")
}

#[test]
fn cli_plays_a_full_visit_from_stdin() {
    let config_path = temp_path("config.json");
    std::fs::write(
        &config_path,
        r#"{"starting_gold": {"min": 100, "max": 100}}"#,
    )
    .expect("write config");

    let output = run_with_stdin(
        &["--config", config_path.to_str().unwrap()],
        "Ada\n2\n5x\nq\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Roscoe's Potion Emporium v1.0.0"));
    assert!(stdout.contains("Hello, Ada, you have 100 gold."));
    assert!(stdout.contains("You purchased a potion of speed.  You have 88 gold left."));
    assert_eq!(
        stdout
            .matches("I didn't understand what you said. Try again: ")
            .count(),
        1
    );
    assert!(stdout.contains("1x potion of speed"));
    assert!(stdout.contains("You escaped with 88 gold remaining."));
    assert!(stdout.trim_end().ends_with("Thanks for shopping at Roscoe's potion emporium!"));
}

#[test]
fn cli_exits_cleanly_when_stdin_closes() {
    let output = run_with_stdin(&["--seed", "3"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello, Stranger, you have"));
    assert!(stdout.contains("You escaped with"));
}

#[test]
fn cli_seed_makes_purse_reproducible() {
    let first = run_with_stdin(&["--seed", "1234", "--name", "Bo"], "q\n");
    let second = run_with_stdin(&["--seed", "1234", "--name", "Bo"], "q\n");
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cli_writes_json_receipt() {
    let output_path = temp_path("receipt.json");
    let output = run_with_stdin(
        &[
            "--seed",
            "9",
            "--name",
            "Cy",
            "--report",
            "json",
            "--output",
            output_path.to_str().unwrap(),
        ],
        "0\nq\n",
    );
    assert!(output.status.success());
    let content = std::fs::read_to_string(&output_path).expect("read receipt");
    let value: serde_json::Value = serde_json::from_str(&content).expect("receipt is json");
    assert_eq!(value["seed"], 9);
    assert_eq!(value["player"], "Cy");
    assert_eq!(value["owned"][0]["kind"], "healing");
    assert_eq!(value["purchases"], 1);
}

#[test]
fn cli_rejects_inverted_gold_range() {
    let config_path = temp_path("bad-config.json");
    std::fs::write(
        &config_path,
        r#"{"starting_gold": {"min": 120, "max": 80}}"#,
    )
    .expect("write config");
    let output = run_with_stdin(&["--config", config_path.to_str().unwrap()], "q\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds maximum"));
}

#[test]
fn cli_prints_markdown_receipt_to_stdout() {
    let output = run_with_stdin(
        &["--seed", "5", "--name", "Di", "--report", "markdown"],
        "1\nq\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let (_, receipt) = stdout
        .split_once("Thanks for shopping at Roscoe's potion emporium!")
        .expect("farewell line");
    assert!(receipt.contains("# Roscoe's potion emporium receipt"));
    assert!(receipt.contains("- **Customer**: Di"));
    assert!(receipt.contains("| mana | 1 | 30 | 30 |"));
}
