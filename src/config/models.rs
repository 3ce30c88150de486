use crate::core::types::{Bool, EventIcon, ThemeColor};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultColorConfigItem {
    pub value: ThemeColor,
    pub description: String,
}

impl Default for DefaultColorConfigItem {
    fn default() -> Self {
        Self {
            value: ThemeColor::default(),
            description: "Color used when a new event names none.".into(),
        }
    }
}

impl ConfigItem<ThemeColor> for DefaultColorConfigItem {
    fn get_value(&self) -> &ThemeColor {
        &self.value
    }
    // Strict here: a typo in config should be reported, not silently defaulted.
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = ThemeColor::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultIconConfigItem {
    pub value: EventIcon,
    pub description: String,
}

impl Default for DefaultIconConfigItem {
    fn default() -> Self {
        Self {
            value: EventIcon::default(),
            description: "Icon used when a new event names none.".into(),
        }
    }
}

impl ConfigItem<EventIcon> for DefaultIconConfigItem {
    fn get_value(&self) -> &EventIcon {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = EventIcon::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowPastConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for ShowPastConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "List events whose date has passed.".into(),
        }
    }
}

impl ConfigItem<Bool> for ShowPastConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
