use super::args::*;
use crate::errors::{Error, Result};

pub struct ArgParser {
    factories: Vec<Box<dyn ArgFactory>>,
}

impl Default for ArgParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgParser {
    /// Factories are tried in order; the first one that can start on a token
    /// claims it. Positions come before dates so `12` is never read as a day.
    pub fn new() -> Self {
        Self {
            factories: vec![
                Box::new(MultiTokenFactory::<NameArg>::new()),
                Box::new(SingleTokenFactory::<EntityTypeArg>::new()),
                Box::new(SingleTokenFactory::<FlagArg>::new()),
                Box::new(SingleTokenFactory::<ColorArg>::new()),
                Box::new(SingleTokenFactory::<IconArg>::new()),
                Box::new(SingleTokenFactory::<IntArg>::new()),
                Box::new(SingleTokenFactory::<DateArg>::new()),
            ],
        }
    }

    pub fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        let mut ts = TokenStream::new(raw);
        let mut out = Vec::new();

        while !ts.eof() {
            let tok = ts.peek()?.to_string();
            let Some(factory) = self.factories.iter().find(|f| f.can_start(&tok)) else {
                return Err(Error::Parse(format!(
                    "Unrecognized argument: '{}'. If this is a name, wrap it in quotes.",
                    tok
                )));
            };
            out.push(factory.parse(&mut ts)?);
        }
        Ok(out)
    }
}
