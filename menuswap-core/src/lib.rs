pub mod types;
pub mod error;
pub mod text;
pub mod config;
pub mod rules;
pub mod engine;

pub use types::*;

// Re-export commonly used types
pub use config::{ConfigChanged, SwapConfig, CONFIG_GROUP};
pub use rules::{Matcher, MatcherKind, Rule, RuleBundle, RuleSet};
pub use error::{Error, Result};
pub use engine::{DefaultPolicy, EntryPolicy, IndexedEntryList, MemoryHost, MenuHost, OptionSwaps, SwapEngine};
