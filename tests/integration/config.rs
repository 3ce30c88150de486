use lumina::config::Config;
use lumina::core::types::{EventIcon, ThemeColor};

use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_args, run_with_input,
    write_valid_config,
};
use std::fs;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let cfg = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(cfg.default_color(), ThemeColor::Cyan);
    assert_eq!(cfg.default_icon(), EventIcon::Calendar);
    assert!(cfg.show_past_events());
}

#[test]
fn config_command_prints_table() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config\nexit\n");

    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|l| l == "CONFIG"));
    assert!(stdout_lines.iter().any(|l| l.starts_with("ID | KEY")));
    assert!(
        stdout_lines
            .iter()
            .any(|l| l.contains("DEFAULT_COLOR") && l.ends_with("cyan"))
    );
}

#[test]
fn config_set_persists_and_logs_change() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config DEFAULT_COLOR emerald\nexit\n");
    assert!(output.status.success());

    let cfg = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(cfg.default_color(), ThemeColor::Emerald);
    let log = read_log_contents(&dir).expect("log written");
    assert!(log.contains("Config DEFAULT_COLOR: cyan -> emerald"));
}

#[test]
fn invalid_config_json_fails_startup() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ nope").unwrap();
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON in 'config.json'"), "stderr was: {stderr}");
}

#[test]
fn config_flag_selects_file() {
    let dir = make_temp_dir("config");
    let output = run_with_args(&dir, &["--config", "alt.json"], "exit\n");
    assert!(output.status.success());
    assert!(dir.join("alt.json").exists());
    assert!(!dir.join("config.json").exists());
}

#[test]
fn file_logging_can_be_turned_off() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    run_with_input(
        &dir,
        "config FILE_LOGGING_ENABLED False\nevent \"Quiet\" 2099-01-01\nexit\n",
    );
    let log = read_log_contents(&dir).unwrap_or_default();
    assert!(!log.contains("Quiet"));
}
