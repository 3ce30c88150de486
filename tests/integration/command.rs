use lumina::core::types::{EventIcon, ThemeColor};

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    normalized_lines, read_log_contents, run_with_input, saved_names, write_config,
    write_valid_config,
};

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "frobnicate\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    let expected = "Command resolution failed for 'frobnicate'. Unknown command: frobnicate";
    assert!(
        stderr_lines.iter().any(|line| line == expected),
        "stderr did not include expected error. stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn startup_lists_paths_and_empty_hint() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|l| l.contains("L U M I N A")));
    assert!(stdout_lines.iter().any(|l| l == "Data path: lumina_events.json"));
    assert!(
        stdout_lines
            .iter()
            .any(|l| l == "No events yet. Add one with: event \"<name>\" <date>")
    );
}

#[test]
fn event_list_shows_added_events_in_order() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "event \"Trip\" 2099-05-01\nevent \"Party\" 2099-03-01\nevent\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    let party = stdout_lines
        .iter()
        .position(|l| l.starts_with("1 |") && l.contains("Party"))
        .expect("Party listed first");
    let trip = stdout_lines
        .iter()
        .position(|l| l.starts_with("2 |") && l.contains("Trip"))
        .expect("Trip listed second");
    assert!(party < trip);
    assert_eq!(saved_names(&dir), ["Party", "Trip"]);
}

#[test]
fn past_events_are_hidden_when_configured() {
    let dir = make_temp_dir("command");
    write_config(&dir, "cyan", "calendar", "False");
    let input = "event \"Old\" 2001-01-01\nevent \"New\" 2099-01-01\nevent\nexit\n";
    let output = run_with_input(&dir, input);

    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|l| l.starts_with("2 |") && l.contains("New")));
    assert!(!stdout_lines.iter().any(|l| l.starts_with("1 |")));
}

#[test]
fn man_command_prints_general_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|line| line == "NAME"));
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "lumina - Personal countdown tracker.")
    );
}

#[test]
fn man_command_prints_event_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man event\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "del event <position>")
    );
}

#[test]
fn event_add_modify_and_delete_flow_succeeds() {
    let dir = make_temp_dir("command");
    write_config(&dir, "orange", "star", "True");
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    execute_command(
        "event \"Launch\" 2099-01-01",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    assert_eq!(ctx.store.len(), 1, "event should be inserted");
    let e = &ctx.store.events()[0];
    assert_eq!((e.color, e.icon), (ThemeColor::Orange, EventIcon::Star));

    execute_command(
        "mod event 1 \"Launch day\" 01/02/2099 grad",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    let e = &ctx.store.events()[0];
    assert_eq!(e.name, "Launch day");
    assert_eq!(e.date, "2099-01-02");
    assert_eq!((e.color, e.icon), (ThemeColor::Orange, EventIcon::Grad));
    assert_eq!(saved_names(&dir), ["Launch day"]);

    execute_command("del event 1", &arg_parser, &command_parser, &mut ctx);
    assert!(ctx.store.is_empty());
    assert!(saved_names(&dir).is_empty());

    let log = read_log_contents(&dir).expect("session log written");
    assert!(log.contains("Added event #1"));
    assert!(log.contains("Deleted event #1"));
}

#[test]
fn invalid_position_reports_error_and_keeps_data() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "event \"Keep\" 2099-01-01\ndel event 3\nexit\n";
    let output = run_with_input(&dir, input);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Command execution failed for 'del'. Parse error: No event at position 3."),
        "stderr was: {stderr}"
    );
    assert_eq!(saved_names(&dir), ["Keep"]);
}

#[test]
fn clear_without_confirmation_keeps_events() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "event \"A\" 2099-01-01\nclear\nexit\n");

    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|l| l == "This removes every event. Run 'clear -y' to confirm.")
    );
    assert_eq!(saved_names(&dir), ["A"]);

    run_with_input(&dir, "clear -y\nexit\n");
    assert!(saved_names(&dir).is_empty());
}

#[test]
fn holidays_are_seeded_once() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "holidays\nholidays\nexit\n");

    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|l| l.starts_with("Added ") && l.ends_with(" holidays."))
    );
    assert!(stdout_lines.iter().any(|l| l == "No new holidays to add."));
    let names = saved_names(&dir);
    assert!(names.iter().any(|n| n == "Eerste Kerstdag"));
}
