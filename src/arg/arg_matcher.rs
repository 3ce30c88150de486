use crate::arg::args::{Arg, ColorArg, DateArg, FlagArg, IconArg, IntArg, NameArg};
use crate::core::types::{Date, EventIcon, Flag, ThemeColor};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;

pub trait ArgMatcher {
    fn matches_variant(actual: &Arg) -> bool;
    fn expected_error(provided: &Arg) -> Error;
}

impl ArgMatcher for NameArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Name(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected a quoted name, got {}", provided))
    }
}

impl ArgMatcher for IntArg {
    fn matches_variant(a: &Arg) -> bool {
        matches!(a, Arg::Int(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a list position (the # column), got {}",
            provided
        ))
    }
}

impl ArgMatcher for FlagArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Flag(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a flag, got {}. Valid flags: {}",
            provided,
            valid_csv::<Flag>()
        ))
    }
}

impl ArgMatcher for ColorArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Color(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a color, got {}. {}",
            provided,
            ThemeColor::usage()
        ))
    }
}

impl ArgMatcher for IconArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Icon(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected an icon, got {}. {}",
            provided,
            EventIcon::usage()
        ))
    }
}

impl ArgMatcher for DateArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Date(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected a date, got {}. {}", provided, Date::usage()))
    }
}
