use crate::core::models::Event;
use crate::errors::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage port for the whole event collection.
///
/// The store never touches storage itself; the session hands a complete
/// snapshot to `save` after each mutation and adopts `load` at startup.
pub trait EventPersistence: std::fmt::Debug {
    fn try_load(&self) -> Result<Vec<Event>>;
    fn save(&self, events: &[Event]) -> Result<()>;

    /// Corrupt or unreadable data yields an empty collection.
    fn load(&self) -> Vec<Event> {
        self.try_load().unwrap_or_default()
    }
}

/// JSON file on disk. A missing file is an empty collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_FILE: &'static str = "lumina_events.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventPersistence for JsonFileStore {
    fn try_load(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, events: &[Event]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(events)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    snapshot: RefCell<Vec<Event>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            snapshot: RefCell::new(events),
        }
    }

    pub fn snapshot(&self) -> Vec<Event> {
        self.snapshot.borrow().clone()
    }
}

impl EventPersistence for InMemoryPersistence {
    fn try_load(&self) -> Result<Vec<Event>> {
        Ok(self.snapshot())
    }

    fn save(&self, events: &[Event]) -> Result<()> {
        *self.snapshot.borrow_mut() = events.to_vec();
        Ok(())
    }
}
