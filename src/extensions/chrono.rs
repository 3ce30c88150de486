use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Strips the time-of-day so only the calendar day takes part in comparisons.
///
/// Every countdown computation goes through this trait; nothing else in the
/// crate truncates times on its own.
pub trait MidnightExt {
    fn to_midnight(&self) -> NaiveDateTime;

    fn calendar_day(&self) -> NaiveDate {
        self.to_midnight().date()
    }
}

impl MidnightExt for NaiveDateTime {
    fn to_midnight(&self) -> NaiveDateTime {
        self.date().and_time(NaiveTime::MIN)
    }
}

impl MidnightExt for NaiveDate {
    fn to_midnight(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

// Wall-clock day in the value's own zone, not the UTC day.
impl<Tz: TimeZone> MidnightExt for DateTime<Tz> {
    fn to_midnight(&self) -> NaiveDateTime {
        self.naive_local().to_midnight()
    }
}
