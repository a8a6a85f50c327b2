//! Runs the built binary's one-shot `convert` command.

use std::process::Command;

fn tempconv_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tempconv"))
}

#[test]
fn test_convert_prints_fahrenheit() {
    let output = tempconv_cmd()
        .args(["convert", "100"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "212.0\n");
}

#[test]
fn test_convert_from_fahrenheit() {
    let output = tempconv_cmd()
        .args(["convert", "--from", "fahrenheit", "32"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.0\n");
}

#[test]
fn test_convert_invalid_input_still_succeeds() {
    let output = tempconv_cmd()
        .args(["convert", "abc"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn test_unknown_scale_is_rejected() {
    let output = tempconv_cmd()
        .args(["convert", "--from", "kelvin", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kelvin"));
}

#[test]
fn test_help_lists_convert() {
    let output = tempconv_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_bad_config_file_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").expect("Failed to write config");

    let output = tempconv_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
