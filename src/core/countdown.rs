use crate::core::types::DateFormat;
use crate::errors::{Error, Result};
use crate::extensions::chrono::MidnightExt;
use chrono::{DateTime, Local, NaiveDate};

const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Day-count classification of a date relative to "now".
///
/// Derived on every read and never stored: "now" moves, so a cached value
/// goes stale at the next midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDiff {
    /// Magnitude only; the sign lives in `is_today` / `is_past`.
    pub days: u64,
    pub is_today: bool,
    pub is_past: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    DaysLeft(u64),
    Today,
    Done,
}

/// How loudly a countdown should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Past,
    Today,
    /// Three days or fewer.
    Imminent,
    /// A week or fewer.
    Soon,
    Normal,
}

impl DateDiff {
    fn from_signed(diff_days: i64) -> Self {
        Self {
            days: diff_days.unsigned_abs(),
            is_today: diff_days == 0,
            is_past: diff_days < 0,
        }
    }

    pub fn status(&self) -> Countdown {
        if self.is_past {
            Countdown::Done
        } else if self.is_today {
            Countdown::Today
        } else {
            Countdown::DaysLeft(self.days)
        }
    }

    pub fn urgency(&self) -> Urgency {
        if self.is_past {
            Urgency::Past
        } else if self.is_today {
            Urgency::Today
        } else if self.days <= 3 {
            Urgency::Imminent
        } else if self.days <= 7 {
            Urgency::Soon
        } else {
            Urgency::Normal
        }
    }
}

/// Parses a stored event date.
///
/// `YYYY-MM-DD` is the stored form. RFC 3339 timestamps (seen in foreign
/// imports) are reduced to their local calendar day.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DateFormat::STORAGE) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Local).calendar_day())
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Signed calendar-day distance from `now` to `target`, both taken at midnight.
pub fn calculate_days_left<N: MidnightExt>(target: &str, now: &N) -> Result<DateDiff> {
    let target = parse_calendar_date(target)?.to_midnight();
    let diff_ms = target
        .signed_duration_since(now.to_midnight())
        .num_milliseconds();
    Ok(DateDiff::from_signed(ceil_div(diff_ms, ONE_DAY_MS)))
}

pub fn calculate_days_left_from_clock(target: &str) -> Result<DateDiff> {
    calculate_days_left(target, &Local::now())
}

pub fn today() -> NaiveDate {
    Local::now().calendar_day()
}

/// `Thu, Jan 1, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let q = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 { q } else { q + 1 }
}
