use std::fmt;
use std::marker::PhantomData;

use crate::core::types::{Date, EntityType, EventIcon, Flag, ThemeColor};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Flag(Flag),
    Color(ThemeColor),
    Icon(EventIcon),
    /// A 1-based list position.
    Int(usize),
    Date(Date),
    Name(String),
    EntityType(EntityType),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Flag(x) => write!(f, "{x}"),
            Arg::Color(x) => write!(f, "{x}"),
            Arg::Icon(x) => write!(f, "{x}"),
            Arg::Int(x) => write!(f, "{x}"),
            Arg::Date(x) => write!(f, "{x}"),
            Arg::Name(x) => write!(f, "\"{x}\""),
            Arg::EntityType(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    toks: Vec<String>,
    i: usize,
}
impl TokenStream {
    pub fn new(raw: &[String]) -> Self {
        Self {
            toks: raw.to_vec(),
            i: 0,
        }
    }
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }
    pub fn peek(&self) -> Result<&str> {
        self.toks
            .get(self.i)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::Parse("EOF".into()))
    }
    pub fn next(&mut self) -> Result<String> {
        let s = self.peek()?.to_string();
        self.i += 1;
        Ok(s)
    }
}

pub trait SingleTokenArg {
    fn accepts(tok: &str) -> bool;
    fn new(tok: &str) -> Result<Arg>;
}

pub trait MultiTokenArg: SingleTokenArg {
    fn starts_sequence(tok: &str) -> bool;
}

pub trait ArgFactory {
    fn can_start(&self, tok: &str) -> bool;
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg>;
}

pub struct SingleTokenFactory<A: SingleTokenArg>(PhantomData<A>);
impl<A: SingleTokenArg> SingleTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: SingleTokenArg> ArgFactory for SingleTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::accepts(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let tok = ts.next()?;
        A::new(&tok)
    }
}

/// Keeps pulling tokens until the joined text is accepted or input runs out.
pub struct MultiTokenFactory<A: MultiTokenArg>(PhantomData<A>);
impl<A: MultiTokenArg> MultiTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: MultiTokenArg> ArgFactory for MultiTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::starts_sequence(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let mut buf: Vec<String> = vec![ts.next()?];
        loop {
            let joined = buf.join(" ");
            if A::accepts(&joined) || ts.eof() {
                return A::new(&joined);
            }
            buf.push(ts.next()?);
        }
    }
}

pub struct NameArg;
impl MultiTokenArg for NameArg {
    fn starts_sequence(value: &str) -> bool {
        value.starts_with(['\'', '"'])
    }
}

impl SingleTokenArg for NameArg {
    fn accepts(value: &str) -> bool {
        let Some(q) = value.chars().next().filter(|c| matches!(c, '\'' | '"')) else {
            return false;
        };
        value.len() > 2 && value.ends_with(q)
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(
                "Name must contain text wrapped in single or double quotes.".into(),
            ));
        }
        Ok(Arg::Name(value[1..value.len() - 1].to_string()))
    }
}

pub struct EntityTypeArg;
impl SingleTokenArg for EntityTypeArg {
    fn accepts(value: &str) -> bool {
        EntityType::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::EntityType(EntityType::try_from(value)?))
    }
}

pub struct ColorArg;
impl SingleTokenArg for ColorArg {
    fn accepts(value: &str) -> bool {
        ThemeColor::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Color(ThemeColor::try_from(value)?))
    }
}

pub struct IconArg;
impl SingleTokenArg for IconArg {
    fn accepts(value: &str) -> bool {
        EventIcon::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Icon(EventIcon::try_from(value)?))
    }
}

pub struct FlagArg;
impl SingleTokenArg for FlagArg {
    fn accepts(value: &str) -> bool {
        Flag::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Flag(Flag::try_from(value)?))
    }
}

pub struct IntArg;
impl SingleTokenArg for IntArg {
    fn accepts(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
    fn new(value: &str) -> Result<Arg> {
        value
            .parse::<usize>()
            .map(Arg::Int)
            .map_err(|_| Error::Parse(format!("Expected a list position, got '{}'", value)))
    }
}

pub struct DateArg;
impl SingleTokenArg for DateArg {
    fn accepts(value: &str) -> bool {
        Date::try_from_str(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Date(Date::try_from_str(value)?))
    }
}
