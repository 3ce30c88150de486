use lumina::core::persist::{EventPersistence, JsonFileStore};

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    run_with_args, run_with_input, saved_names, write_valid_config,
};
use std::fs;

#[test]
fn events_survive_a_restart() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);

    let first = run_with_input(&dir, "event \"Wedding\" 2099-06-12 pink heart\nexit\n");
    assert!(first.status.success());

    let ctx = build_context(&dir);
    assert_eq!(ctx.store.len(), 1);
    assert_eq!(ctx.store.events()[0].name, "Wedding");
}

#[test]
fn saved_file_uses_the_event_json_shape() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    run_with_input(&dir, "event \"Wedding\" 2099-06-12 pink heart\nexit\n");

    let text = fs::read_to_string(dir.join("lumina_events.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = &value[0];
    assert_eq!(record["name"], "Wedding");
    assert_eq!(record["date"], "2099-06-12");
    assert_eq!(record["color"], "pink");
    assert_eq!(record["icon"], "heart");
    assert!(record["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(record["createdAt"].is_i64());
}

#[test]
fn corrupt_data_file_starts_empty_with_warning() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    fs::write(dir.join("lumina_events.json"), "not json").unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not read saved events"), "stderr was: {stderr}");
}

#[test]
fn data_flag_points_at_another_file() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let output = run_with_args(
        &dir,
        &["--data", "elsewhere.json"],
        "event \"Moved\" 2099-01-01\nexit\n",
    );
    assert!(output.status.success());
    assert!(!dir.join("lumina_events.json").exists());

    let events = JsonFileStore::new(dir.join("elsewhere.json")).try_load().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Moved");
}

#[test]
fn export_then_import_restores_collection() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    for line in [
        "event \"B\" 2099-02-01 blue",
        "event \"A\" 2099-01-01 game",
        "export",
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }
    let exported: Vec<_> = fs::read_dir(dir.join("exports"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    assert_eq!(exported.len(), 1);
    let file_name = exported[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("lumina-export-") && file_name.ends_with(".json"));

    let before = ctx.store.events().to_vec();
    execute_command("clear -y", &arg_parser, &command_parser, &mut ctx);
    assert!(saved_names(&dir).is_empty());

    let import = format!("import \"{}\"", exported[0].display());
    execute_command(&import, &arg_parser, &command_parser, &mut ctx);
    assert_eq!(ctx.store.events(), before.as_slice());
    assert_eq!(saved_names(&dir), ["A", "B"]);
}

#[test]
fn import_of_non_list_is_rejected() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    fs::write(dir.join("bad.json"), r#"{"foo": 1}"#).unwrap();

    let output = run_with_input(&dir, "event \"Stay\" 2099-01-01\nimport \"bad.json\"\nexit\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Import failed: expected a list of events"),
        "stderr was: {stderr}"
    );
    assert_eq!(saved_names(&dir), ["Stay"]);
}
