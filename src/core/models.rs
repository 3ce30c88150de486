use crate::core::countdown::parse_calendar_date;
use crate::core::types::{DateFormat, EventIcon, ThemeColor};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type EventId = String;

/// A countdown target. Serialized with the camelCase field names the data
/// file has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub color: ThemeColor,
    #[serde(default)]
    pub icon: EventIcon,
    #[serde(default)]
    pub created_at: i64,
}

impl Event {
    /// Builds a fresh record from a draft that already passed validation.
    pub(crate) fn from_draft(draft: EventDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            date: draft.date,
            color: draft.color,
            icon: draft.icon,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Replaces every mutable field; `id` and `created_at` stay.
    pub fn modify(&mut self, draft: EventDraft) -> &Self {
        self.name = draft.name;
        self.date = draft.date;
        self.color = draft.color;
        self.icon = draft.icon;
        self
    }

    /// `None` when the stored date string is not a calendar date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date).ok()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(name='{}', date={}, color={}, icon={})",
            self.name, self.date, self.color, self.icon
        )
    }
}

/// The user-editable part of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub color: ThemeColor,
    pub icon: EventIcon,
}

impl EventDraft {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        color: ThemeColor,
        icon: EventIcon,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            color,
            icon,
        }
    }

    /// Rejects blank names and dates that are not `YYYY-MM-DD` calendar days.
    pub fn validate(&self) -> Result<NaiveDate> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.date.trim().is_empty() {
            return Err(Error::validation("date must not be empty"));
        }
        NaiveDate::parse_from_str(self.date.trim(), DateFormat::STORAGE).map_err(|_| {
            Error::validation(format!(
                "date '{}' is not a calendar date (expected YYYY-MM-DD)",
                self.date
            ))
        })
    }

    /// Validates, then rewrites `date` in its stored `YYYY-MM-DD` form so
    /// `2030-12-5` and `2030-12-05` end up as the same string.
    pub fn canonicalize(mut self) -> Result<(Self, NaiveDate)> {
        let date = self.validate()?;
        self.date = date.format(DateFormat::STORAGE).to_string();
        Ok((self, date))
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date.clone(),
            color: event.color,
            icon: event.icon,
        }
    }
}
