use crate::core::models::Event;
use crate::errors::{Error, Result};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Serializes the full collection exactly as the data file stores it.
pub fn export_snapshot(events: &[Event]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

pub fn export_file_name(stamp: NaiveDateTime) -> String {
    format!("lumina-export-{}.json", stamp.format("%Y%m%d-%H%M%S"))
}

/// Writes `<dir>/lumina-export-YYYYMMDD-HHMMSS.json` and returns its path.
///
/// An existing export is never overwritten: a second export in the same
/// second gets a `-2`, `-3`, ... suffix.
pub fn export_to_dir(events: &[Event], dir: &Path, stamp: NaiveDateTime) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let body = export_snapshot(events)?;
    let base = export_file_name(stamp);
    let stem = base.trim_end_matches(".json");

    for n in 1..=999 {
        let path = if n == 1 {
            dir.join(&base)
        } else {
            dir.join(format!("{stem}-{n}.json"))
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(body.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(Error::Domain(format!(
        "no free export file name in {}",
        dir.display()
    )))
}

/// Parses an import payload. Anything but an array of event records is
/// rejected; the caller's collection is never touched on error.
pub fn parse_import(text: &str) -> Result<Vec<Event>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::import(format!("file is not valid JSON ({e})")))?;
    if !value.is_array() {
        return Err(Error::import("expected a list of events"));
    }
    let events: Vec<Event> = serde_json::from_value(value)
        .map_err(|e| Error::import(format!("malformed event record ({e})")))?;

    let mut ids = HashSet::new();
    for event in &events {
        if !ids.insert(event.id.as_str()) {
            return Err(Error::import(format!("duplicate event id '{}'", event.id)));
        }
    }
    Ok(events)
}

pub fn import_file(path: &Path) -> Result<Vec<Event>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::import(format!("cannot read {} ({e})", path.display())))?;
    parse_import(&text)
}
