use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::errors::{Error, Result};

/// Every variant's string form, comma separated, for "valid values" hints.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses one keyword of a closed set. `noun` is singular ("entity type")
/// and is pluralized with a trailing `s` in the hint.
pub fn parse_keyword<T>(s: &str, noun: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    let s = s.trim();
    T::from_str(s).map_err(|_| {
        Error::Parse(format!(
            "Unsupported {noun}: '{s}'. Valid {noun}s: {}",
            valid_csv::<T>()
        ))
    })
}
