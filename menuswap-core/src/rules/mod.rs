//! Rule compilation and matching

mod pattern;
mod rule;
mod rule_set;

pub use pattern::{Matcher, MatcherKind, Wildcard};
pub use rule::Rule;
pub use rule_set::{RuleBundle, RuleSet};
