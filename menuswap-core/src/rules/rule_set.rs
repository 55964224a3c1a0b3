//! Ordered rule lists loaded from configuration text

use log::debug;

use super::rule::Rule;
use crate::config::SwapConfig;

/// Rules from one configuration block, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parses one rule per line, skipping blank lines
    pub fn parse(text: &str) -> Self {
        let rules = text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(Rule::parse)
            .collect();
        Self { rules }
    }

    /// Index of the first rule matching the entry, if any.
    ///
    /// The index is the rank: a lower index is a higher declared priority.
    pub fn rank_match(
        &self,
        option: &str,
        target: &str,
        top_option: &str,
        top_target: &str,
    ) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| rule.matches(option, target, top_option, top_target))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl From<&str> for RuleSet {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// All three rule sets, always built and replaced together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBundle {
    pub swaps: RuleSet,
    pub shift_swaps: RuleSet,
    pub hides: RuleSet,
}

impl RuleBundle {
    pub fn from_config(config: &SwapConfig) -> Self {
        let bundle = Self {
            swaps: RuleSet::parse(&config.custom_swaps),
            shift_swaps: RuleSet::parse(&config.custom_shift_swaps),
            hides: RuleSet::parse(&config.custom_hides),
        };
        debug!(
            "loaded {} swap, {} shift swap and {} hide rules",
            bundle.swaps.len(),
            bundle.shift_swaps.len(),
            bundle.hides.len()
        );
        bundle
    }

    /// Promotion rules for the current modifier state
    pub fn promotions(&self, modifier_held: bool) -> &RuleSet {
        if modifier_held {
            &self.shift_swaps
        } else {
            &self.swaps
        }
    }
}
