use std::collections::HashMap;

use crate::arg::arg_parser::ArgParser;
use crate::arg::args::{
    Arg, ArgFactory, FlagArg, MultiTokenArg, MultiTokenFactory, NameArg, SingleTokenArg,
    TokenStream,
};
use crate::errors::Result;
use crate::extensions::string::StripQuotes;

pub trait ArgParseStrategy {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>>;
}

pub struct StandardArgParser {
    parser: ArgParser,
}

impl StandardArgParser {
    pub fn new() -> Self {
        Self {
            parser: ArgParser::new(),
        }
    }
}

impl ArgParseStrategy for StandardArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        self.parser.parse(raw)
    }
}

/// The rest of the line is one free-text value (a manual topic, a file
/// path). Quotes are optional. A lone flag is still a flag.
pub struct FreeTextArgParser;

impl ArgParseStrategy for FreeTextArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        match raw {
            [] => Ok(Vec::new()),
            [only] if FlagArg::accepts(only) => Ok(vec![FlagArg::new(only)?]),
            _ => {
                let joined = raw.join(" ");
                Ok(vec![Arg::Name(joined.strip_wrapping_quotes().to_string())])
            }
        }
    }
}

/// Key/value words for `config`: quoted groups and bare words both become
/// names, so `config DEFAULT_COLOR pink` and the quoted form are equivalent.
pub struct WordsArgParser;

impl ArgParseStrategy for WordsArgParser {
    fn parse(&self, raw: &[String]) -> Result<Vec<Arg>> {
        let quoted = MultiTokenFactory::<NameArg>::new();
        let mut ts = TokenStream::new(raw);
        let mut out = Vec::new();
        while !ts.eof() {
            let tok = ts.peek()?.to_string();
            if NameArg::starts_sequence(&tok) {
                out.push(quoted.parse(&mut ts)?);
            } else if FlagArg::accepts(&tok) {
                out.push(FlagArg::new(&ts.next()?)?);
            } else {
                out.push(Arg::Name(ts.next()?));
            }
        }
        Ok(out)
    }
}

pub struct CommandArgParser {
    default: StandardArgParser,
    overrides: HashMap<String, Box<dyn ArgParseStrategy>>,
}

impl Default for CommandArgParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandArgParser {
    pub fn new() -> Self {
        let mut overrides: HashMap<String, Box<dyn ArgParseStrategy>> = HashMap::new();
        overrides.insert("man".to_string(), Box::new(FreeTextArgParser));
        overrides.insert("import".to_string(), Box::new(FreeTextArgParser));
        overrides.insert("config".to_string(), Box::new(WordsArgParser));
        Self {
            default: StandardArgParser::new(),
            overrides,
        }
    }

    pub fn parse(&self, command: &str, raw: &[String]) -> Result<Vec<Arg>> {
        let key = command.trim().to_ascii_lowercase();
        match self.overrides.get(&key) {
            Some(parser) => parser.parse(raw),
            None => self.default.parse(raw),
        }
    }
}
