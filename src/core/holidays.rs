use crate::core::models::EventDraft;
use crate::core::types::{DateFormat, EventIcon, ThemeColor};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Fixed { month: u32, day: u32 },
    /// Days relative to Easter Sunday.
    Easter(i64),
    /// 27 April, or the 26th when the 27th is a Sunday.
    KingsDay,
}

struct Holiday {
    name: &'static str,
    anchor: Anchor,
    color: ThemeColor,
    icon: EventIcon,
}

const DUTCH_HOLIDAYS: &[Holiday] = &[
    Holiday {
        name: "Nieuwjaarsdag",
        anchor: Anchor::Fixed { month: 1, day: 1 },
        color: ThemeColor::Purple,
        icon: EventIcon::Party,
    },
    Holiday {
        name: "Goede Vrijdag",
        anchor: Anchor::Easter(-2),
        color: ThemeColor::Blue,
        icon: EventIcon::Calendar,
    },
    Holiday {
        name: "Eerste Paasdag",
        anchor: Anchor::Easter(0),
        color: ThemeColor::Emerald,
        icon: EventIcon::Star,
    },
    Holiday {
        name: "Tweede Paasdag",
        anchor: Anchor::Easter(1),
        color: ThemeColor::Emerald,
        icon: EventIcon::Star,
    },
    Holiday {
        name: "Koningsdag",
        anchor: Anchor::KingsDay,
        color: ThemeColor::Orange,
        icon: EventIcon::Party,
    },
    Holiday {
        name: "Bevrijdingsdag",
        anchor: Anchor::Fixed { month: 5, day: 5 },
        color: ThemeColor::Blue,
        icon: EventIcon::Star,
    },
    Holiday {
        name: "Hemelvaartsdag",
        anchor: Anchor::Easter(39),
        color: ThemeColor::Cyan,
        icon: EventIcon::Star,
    },
    Holiday {
        name: "Eerste Pinksterdag",
        anchor: Anchor::Easter(49),
        color: ThemeColor::Pink,
        icon: EventIcon::Heart,
    },
    Holiday {
        name: "Tweede Pinksterdag",
        anchor: Anchor::Easter(50),
        color: ThemeColor::Pink,
        icon: EventIcon::Heart,
    },
    Holiday {
        name: "Eerste Kerstdag",
        anchor: Anchor::Fixed { month: 12, day: 25 },
        color: ThemeColor::Emerald,
        icon: EventIcon::Home,
    },
    Holiday {
        name: "Tweede Kerstdag",
        anchor: Anchor::Fixed { month: 12, day: 26 },
        color: ThemeColor::Emerald,
        icon: EventIcon::Home,
    },
];

/// Easter Sunday (Gregorian) via the anonymous "Meeus/Jones/Butcher" computus.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn resolve(anchor: Anchor, year: i32, easter: NaiveDate) -> Option<NaiveDate> {
    match anchor {
        Anchor::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
        Anchor::Easter(offset) => easter.checked_add_signed(Duration::days(offset)),
        Anchor::KingsDay => {
            let date = NaiveDate::from_ymd_opt(year, 4, 27)?;
            if date.weekday() == Weekday::Sun {
                date.pred_opt()
            } else {
                Some(date)
            }
        }
    }
}

/// Public holidays in the Netherlands for one year, in calendar order.
pub fn dutch_holidays(year: i32) -> Vec<EventDraft> {
    let Some(easter) = easter_sunday(year) else {
        return Vec::new();
    };
    let mut drafts: Vec<(NaiveDate, EventDraft)> = DUTCH_HOLIDAYS
        .iter()
        .filter_map(|h| {
            let date = resolve(h.anchor, year, easter)?;
            let draft = EventDraft::new(
                h.name,
                date.format(DateFormat::STORAGE).to_string(),
                h.color,
                h.icon,
            );
            Some((date, draft))
        })
        .collect();
    drafts.sort_by_key(|(date, _)| *date);
    drafts.into_iter().map(|(_, d)| d).collect()
}

/// Seed candidates: this year's and next year's holidays.
pub fn holiday_candidates(today: NaiveDate) -> Vec<EventDraft> {
    let year = today.year();
    let mut out = dutch_holidays(year);
    out.extend(dutch_holidays(year + 1));
    out
}
