use crate::arg::arg_extractor::ArgExtractor;
use crate::arg::args::{Arg, FlagArg};
use crate::core::types::Flag;

#[derive(Debug)]
pub enum FlagDecision {
    /// Stop execution and just print usage()
    ShortCircuitUsage,
    /// Stop with a custom message (e.g., a confirmation hint)
    ShortCircuitMsg(String),
    /// Continue command execution
    Continue,
    /// Turn into an error
    Error(crate::errors::Error),
}

pub trait FlagRule {
    fn check(&self, args: &[Arg]) -> FlagDecision;
}

pub struct HelpAtIdx(pub usize);
impl FlagRule for HelpAtIdx {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        match args.get(self.0) {
            Some(Arg::Flag(Flag::Help)) => FlagDecision::ShortCircuitUsage,
            _ => FlagDecision::Continue,
        }
    }
}

/// Stops with the given hint unless `flag` appears anywhere in the args.
pub struct RequireFlag(pub Flag, pub String);
impl FlagRule for RequireFlag {
    fn check(&self, args: &[Arg]) -> FlagDecision {
        if args.iter().any(|a| FlagArg::try_extract(a) == Some(self.0)) {
            FlagDecision::Continue
        } else {
            FlagDecision::ShortCircuitMsg(self.1.clone())
        }
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}
impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }
    pub fn none() -> Self {
        Self { rules: vec![] }
    }

    pub fn evaluate(&self, args: &[Arg]) -> FlagDecision {
        // First matching short-circuit wins; otherwise Continue.
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
