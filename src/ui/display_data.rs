use crate::config::Config;
use crate::core::countdown::{Countdown, DateDiff, Urgency, calculate_days_left, format_date};
use crate::core::models::Event;
use crate::core::store::EventStore;
use crate::errors::Result;
use crate::ui::ansi::{FG_DIM_GRAY, FG_LIGHT_RED, FG_ORANGE, FG_RED_BOLD, STYLE_RESET};
use chrono::NaiveDate;

pub const EVENT_HEADERS: [&str; 5] = ["#", "ICON", "NAME", "DATE", "COUNTDOWN"];
pub const CONFIG_HEADERS: [&str; 4] = ["ID", "KEY", "DESCRIPTION", "VALUE"];

/// Turns store and config state into painted table cells.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn countdown_label(diff: &Result<DateDiff>) -> String {
        match diff.as_ref().map(DateDiff::status) {
            Ok(Countdown::DaysLeft(1)) => "1 day left".to_string(),
            Ok(Countdown::DaysLeft(n)) => format!("{n} days left"),
            Ok(Countdown::Today) => "Today!".to_string(),
            Ok(Countdown::Done) => "Done".to_string(),
            Err(_) => "Invalid date".to_string(),
        }
    }

    /// One row per listed event, keeping each event's position in the full
    /// list so `mod`/`del` can refer to it even when past events are hidden.
    pub fn event_rows(
        &self,
        store: &EventStore,
        today: NaiveDate,
        show_past: bool,
    ) -> Vec<Vec<String>> {
        store
            .query()
            .r#where(move |e| {
                show_past || !calculate_days_left(&e.date, &today).is_ok_and(|d| d.is_past)
            })
            .collect()
            .into_iter()
            .map(|(position, event)| self.event_row(position, event, today))
            .collect()
    }

    fn event_row(&self, position: usize, event: &Event, today: NaiveDate) -> Vec<String> {
        let diff = calculate_days_left(&event.date, &today);
        let date = event
            .calendar_date()
            .map(format_date)
            .unwrap_or_else(|| event.date.clone());
        let countdown = Self::countdown_label(&diff);
        let countdown = match diff.as_ref().map(DateDiff::urgency) {
            Ok(urgency) => paint_urgency(urgency, event, &countdown),
            Err(_) => paint(FG_DIM_GRAY, &countdown),
        };
        let past = diff.as_ref().is_ok_and(|d| d.is_past);
        let name = if past {
            paint(FG_DIM_GRAY, &event.name)
        } else {
            event.color.paint(&event.name)
        };
        vec![
            position.to_string(),
            event.icon.glyph().to_string(),
            name,
            date,
            countdown,
        ]
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }
}

fn paint(style: &str, s: &str) -> String {
    format!("{style}{s}{STYLE_RESET}")
}

// Close dates get louder; anything further out keeps the event's own color.
fn paint_urgency(urgency: Urgency, event: &Event, s: &str) -> String {
    match urgency {
        Urgency::Past => paint(FG_DIM_GRAY, s),
        Urgency::Today => paint(FG_RED_BOLD, s),
        Urgency::Imminent => paint(FG_LIGHT_RED, s),
        Urgency::Soon => paint(FG_ORANGE, s),
        Urgency::Normal => event.color.paint(s),
    }
}
