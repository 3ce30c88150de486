use chrono::NaiveDate;
use lumina::core::countdown::calculate_days_left;
use lumina::core::models::EventDraft;
use lumina::core::store::EventStore;
use lumina::core::types::{EventIcon, ThemeColor};

use crate::common::{make_temp_dir, run_with_args};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn trip_and_party_scenario() {
    let mut store = EventStore::new();
    store
        .add(EventDraft::new("Trip", "2030-05-01", ThemeColor::Blue, EventIcon::Plane))
        .unwrap();
    store
        .add(EventDraft::new("Party", "2030-03-01", ThemeColor::Pink, EventIcon::Party))
        .unwrap();

    let names: Vec<&str> = store.events().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Party", "Trip"]);

    let now = day("2030-02-27");
    let party = calculate_days_left(&store.events()[0].date, &now).unwrap();
    assert_eq!((party.days, party.is_today, party.is_past), (2, false, false));
}

#[test]
fn unknown_flag_exits_with_error() {
    let dir = make_temp_dir("cli");
    let output = run_with_args(&dir, &["--verbose"], "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"));
}

#[test]
fn missing_flag_value_exits_with_error() {
    let dir = make_temp_dir("cli");
    let output = run_with_args(&dir, &["--logs"], "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing value for --logs"));
}
