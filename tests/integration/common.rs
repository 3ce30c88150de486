use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use lumina::arg::arg_parse_strategy::CommandArgParser;
pub use lumina::command::command_parser::CommandParser;
use lumina::core::cli::CliPaths;
use lumina::core::context::AppContext;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_lumina"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lumina-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, color: &str, icon: &str, show_past: &str) {
    let cfg = format!(
        r#"{{
      "default_color": {{ "value": "{color}", "description": "color" }},
      "default_icon": {{ "value": "{icon}", "description": "icon" }},
      "show_past_events": {{ "value": "{show_past}", "description": "past" }},
      "file_logging_enabled": {{ "value": "True", "description": "file logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_valid_config(dir: &Path) {
    write_config(dir, "cyan", "calendar", "True");
}

/// Runs the binary inside `dir` (so the default relative paths land there).
pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' {
            if matches!(chars.peek(), Some('[')) {
                let _ = chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if c.is_control() {
            continue;
        }

        out.push(c);
    }

    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn paths_in(dir: &Path) -> CliPaths {
    CliPaths {
        config_path: dir.join("config.json"),
        data_path: dir.join("lumina_events.json"),
        exports_dir: dir.join("exports"),
        logs_dir: dir.join("logs"),
    }
}

pub fn build_context(dir: &Path) -> AppContext {
    AppContext::new_with_paths(paths_in(dir)).expect("context should build")
}

pub fn execute_command(
    line: &str,
    arg_parser: &CommandArgParser,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let raw_args: Vec<String> = parts.map(|s| s.to_string()).collect();

    let args = arg_parser
        .parse(command, &raw_args)
        .unwrap_or_else(|e| panic!("arg parse failed for '{}': {}", line, e));
    let cmd = command_parser
        .parse(command, &args)
        .unwrap_or_else(|e| panic!("command parse failed for '{}': {}", line, e));
    cmd.execute(ctx)
        .unwrap_or_else(|e| panic!("command execute failed for '{}': {}", line, e));
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

pub fn saved_names(dir: &Path) -> Vec<String> {
    let text = fs::read_to_string(dir.join("lumina_events.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}
