pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DefaultColorConfigItem, DefaultIconConfigItem, FileLoggingConfigItem,
    ShowPastConfigItem,
};
use crate::core::types::{EventIcon, ThemeColor};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    DefaultColor,
    DefaultIcon,
    ShowPastEvents,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_color: DefaultColorConfigItem,
    #[serde(default)]
    pub default_icon: DefaultIconConfigItem,
    #[serde(default)]
    pub show_past_events: ShowPastConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    /// Reads the config file, writing one with defaults if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let cfg = Self {
                path,
                data: ConfigFile::default(),
                last_change: None,
            };
            cfg.save()?;
            return Ok(cfg);
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_color(&self) -> ThemeColor {
        *self.data.default_color.get_value()
    }
    pub fn default_icon(&self) -> EventIcon {
        *self.data.default_icon.get_value()
    }
    pub fn show_past_events(&self) -> bool {
        self.data.show_past_events.get_value().0
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn row_for(&self, key: ConfigKey) -> (String, String, String) {
        let (description, value) = match key {
            ConfigKey::DefaultColor => (
                self.data.default_color.description(),
                self.data.default_color.get_value().to_string(),
            ),
            ConfigKey::DefaultIcon => (
                self.data.default_icon.description(),
                self.data.default_icon.get_value().to_string(),
            ),
            ConfigKey::ShowPastEvents => (
                self.data.show_past_events.description(),
                self.data.show_past_events.get_value().to_string(),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.data.file_logging_enabled.description(),
                self.data.file_logging_enabled.get_value().to_string(),
            ),
        };
        (key.to_string(), description.to_string(), value)
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(ConfigKey::iter().map(|key| self.row_for(key)).collect())
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (_, _, old) = self.row_for(key);
        let res = self.edit(|cfg| match key {
            ConfigKey::DefaultColor => cfg.default_color.set_value(new_value),
            ConfigKey::DefaultIcon => cfg.default_icon.set_value(new_value),
            ConfigKey::ShowPastEvents => cfg.show_past_events.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        });

        if res.is_ok() {
            let (_, _, new_val) = self.row_for(key);
            // Stashed for the caller to log.
            self.last_change = Some((key.to_string(), old, new_val));
        }

        res
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut staged = self.data.clone();
        f(&mut staged)?;
        self.data = staged;
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::config(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
