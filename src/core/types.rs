use crate::errors::{Error, Result};
use crate::extensions::enums::{parse_keyword, valid_csv};
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "holidays", to_string = "holidays")]
    Holidays,
    #[strum(serialize = "export", to_string = "export")]
    Export,
    #[strum(serialize = "import", to_string = "import")]
    Import,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "log", to_string = "log")]
    Log,
    #[strum(serialize = "man", to_string = "man")]
    Man,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_keyword(s, "global command")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TypeHelpCommand {
    #[strum(serialize = "date", to_string = "date")]
    Date,
    #[strum(serialize = "colors", to_string = "colors")]
    Colors,
    #[strum(serialize = "icons", to_string = "icons")]
    Icons,
}

impl TypeHelpCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_keyword(s, "type help command")
    }

    pub fn usage(&self) -> String {
        match self {
            TypeHelpCommand::Date => Date::usage(),
            TypeHelpCommand::Colors => ThemeColor::usage(),
            TypeHelpCommand::Icons => EventIcon::usage(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EntityType {
    #[strum(serialize = "event", to_string = "event")]
    Event,
}
impl EntityType {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_keyword(s, "entity type")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIterDerive, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EntityActionType {
    #[strum(serialize = "")]
    Add,
    #[strum(serialize = "mod")]
    Modify,
    #[strum(serialize = "del")]
    Delete,
}
impl EntityActionType {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_keyword(s, "action")
    }
}

/// User-entered calendar date. Stored on events as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d", to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y", to_string = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%Y/%m/%d", to_string = "%Y/%m/%d")]
    YmdSlash,
    #[strum(serialize = "%m/%d/%Y", to_string = "%m/%d/%Y")]
    MdYSlash,
    #[strum(serialize = "%m-%d", to_string = "%m-%d")]
    MdDash,
    #[strum(serialize = "%m/%d", to_string = "%m/%d")]
    MdSlash,
}

#[derive(Debug, Clone)]
struct DateParseSpec {
    input: String,
    date_format: DateFormat,
}

impl DateFormat {
    pub const STORAGE: &'static str = "%Y-%m-%d";

    fn build_parse_spec(self, input: &str) -> DateParseSpec {
        let current_year = Local::now().date_naive().year();
        match self {
            DateFormat::YmdDash | DateFormat::YmdSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::YmdDash,
            },
            DateFormat::MdYDash | DateFormat::MdYSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::MdYDash,
            },
            DateFormat::MdDash | DateFormat::MdSlash => DateParseSpec {
                input: format!("{current_year}-{input}"),
                date_format: DateFormat::YmdDash,
            },
        }
    }
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }
    fn error_message(input: &str) -> String {
        format!("Invalid date format: '{}'. {}", input, Self::usage())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let spec = f.build_parse_spec(&input);
            if let Ok(date) = NaiveDate::parse_from_str(&spec.input, spec.date_format.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(Self::error_message(&input)))
    }

    /// The canonical string written into `Event::date`.
    pub fn to_storage(&self) -> String {
        self.0.format(DateFormat::STORAGE).to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DateFormat::STORAGE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Cyan,
    Purple,
    Pink,
    Orange,
    Emerald,
    Blue,
}

impl ThemeColor {
    pub const RESET: &'static str = crate::csi!("0m");

    /// Foreground ANSI color for this theme color.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            ThemeColor::Cyan => crate::csi!("36m"),
            ThemeColor::Purple => crate::csi!("35m"),
            ThemeColor::Pink => crate::csi!("38;5;213m"),
            ThemeColor::Orange => crate::csi!("38;5;208m"),
            ThemeColor::Emerald => crate::csi!("38;5;42m"),
            ThemeColor::Blue => crate::csi!("34m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }

    pub fn usage() -> String {
        format!("Valid colors: {}", valid_csv::<ThemeColor>())
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid value for color: '{}'. {}",
                s.trim(),
                Self::usage()
            ))
        })
    }

    /// Unknown keys fall back to the default instead of failing.
    pub fn from_key_or_default(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or_default()
    }
}

impl Serialize for ThemeColor {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for ThemeColor {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ThemeColor, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ThemeColor::from_key_or_default(&s))
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EventIcon {
    #[default]
    Calendar,
    Plane,
    Party,
    Cake,
    Heart,
    Briefcase,
    Music,
    Dumbbell,
    Star,
    Home,
    Grad,
    Game,
}

impl EventIcon {
    /// Single-glyph rendering for terminal tables.
    pub fn glyph(self) -> &'static str {
        match self {
            EventIcon::Calendar => "📅",
            EventIcon::Plane => "✈",
            EventIcon::Party => "🎉",
            EventIcon::Cake => "🎂",
            EventIcon::Heart => "♥",
            EventIcon::Briefcase => "💼",
            EventIcon::Music => "♪",
            EventIcon::Dumbbell => "🏋",
            EventIcon::Star => "★",
            EventIcon::Home => "⌂",
            EventIcon::Grad => "🎓",
            EventIcon::Game => "🎮",
        }
    }

    pub fn usage() -> String {
        format!("Valid icons: {}", valid_csv::<EventIcon>())
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid value for icon: '{}'. {}",
                s.trim(),
                Self::usage()
            ))
        })
    }

    pub fn from_key_or_default(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or_default()
    }
}

impl Serialize for EventIcon {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for EventIcon {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<EventIcon, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EventIcon::from_key_or_default(&s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Flag {
    #[strum(serialize = "-h", serialize = "-help", to_string = "-h")]
    Help,
    #[strum(serialize = "-y", serialize = "-yes", to_string = "-y")]
    Yes,
}

impl Flag {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: {}. Valid flags: {}",
                s,
                valid_csv::<Flag>()
            ))
        })
    }
}
