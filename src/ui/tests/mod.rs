
use crate::core::models::EventDraft;
use crate::core::store::EventStore;
use crate::core::types::{EventIcon, ThemeColor};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(super) fn temp_config_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("lumina-ui-test-{nanos}-{uniq}.json"))
}

pub(super) fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Past, today, tomorrow and a far-off event around 2030-06-10.
pub(super) fn sample_store() -> EventStore {
    let mut store = EventStore::new();
    for (name, date, color) in [
        ("Trip", "2030-08-01", ThemeColor::Blue),
        ("Launch", "2030-06-10", ThemeColor::Pink),
        ("Dentist", "2030-06-11", ThemeColor::Cyan),
        ("Concert", "2030-05-01", ThemeColor::Purple),
    ] {
        store
            .add(EventDraft::new(name, date, color, EventIcon::Music))
            .unwrap();
    }
    store
}
