use crate::arg::arg_matcher::ArgMatcher;
use crate::arg::args::{Arg, ColorArg, DateArg, FlagArg, IconArg, IntArg, NameArg};
use crate::core::types::{Date, EventIcon, Flag, ThemeColor};
use crate::errors::{Error, Result};

pub trait ArgExtractor<'a>: ArgMatcher {
    type Out;

    fn try_extract(actual: &'a Arg) -> Option<Self::Out>;
}

/// Typed value at `idx`, or a parse error naming what was expected.
pub fn extract_at<'a, E: ArgExtractor<'a>>(args: &'a [Arg], idx: usize) -> Result<E::Out> {
    let a = args
        .get(idx)
        .ok_or_else(|| Error::Parse(format!("Missing argument at position {}.", idx + 1)))?;
    E::try_extract(a).ok_or_else(|| E::expected_error(a))
}

/// Like `extract_at`, but an absent argument is `None` instead of an error.
pub fn extract_opt<'a, E: ArgExtractor<'a>>(
    args: &'a [Arg],
    idx: usize,
) -> Result<Option<E::Out>> {
    match args.get(idx) {
        None => Ok(None),
        Some(a) => E::try_extract(a).map(Some).ok_or_else(|| E::expected_error(a)),
    }
}

impl<'a> ArgExtractor<'a> for NameArg {
    type Out = &'a str;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Name(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for IntArg {
    type Out = usize;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for DateArg {
    type Out = &'a Date;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ColorArg {
    type Out = ThemeColor;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for IconArg {
    type Out = EventIcon;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Icon(i) => Some(*i),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for FlagArg {
    type Out = Flag;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Flag(f) => Some(*f),
            _ => None,
        }
    }
}
