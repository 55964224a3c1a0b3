//! Four-field rule parsed from one configuration line

use std::fmt;
use std::str::FromStr;

use super::pattern::Matcher;

/// A parsed `option[,target[,topOption[,topTarget]]]` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub option: Matcher,
    pub target: Matcher,
    pub top_option: Matcher,
    pub top_target: Matcher,
}

impl Rule {
    /// Builds a rule from raw field text. `None` top fields are ignored.
    pub fn new(option: &str, target: &str, top_option: Option<&str>, top_target: Option<&str>) -> Self {
        Self {
            option: Matcher::parse(option),
            target: Matcher::parse(target),
            top_option: Matcher::compile(top_option),
            top_target: Matcher::compile(top_target),
        }
    }

    /// Parses one configuration line.
    ///
    /// Fields are lowercased and trimmed. A missing target is the empty
    /// string, missing top fields match anything. Nothing here fails: a
    /// line without commas is an option-only rule.
    pub fn parse(line: &str) -> Self {
        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last().map_or(false, |f| f.is_empty()) {
            fields.pop();
        }

        let field = |i: usize| fields.get(i).map(|f| f.to_lowercase().trim().to_string());

        let option = field(0).unwrap_or_default();
        let target = field(1).unwrap_or_default();
        let top_option = field(2);
        let top_target = field(3);

        Self::new(&option, &target, top_option.as_deref(), top_target.as_deref())
    }

    /// Full match against an entry and the current top entry
    pub fn matches(&self, option: &str, target: &str, top_option: &str, top_target: &str) -> bool {
        self.option.test(option)
            && self.target.test(target)
            && self.top_option.test(top_option)
            && self.top_target.test(top_target)
    }

    /// Match ignoring the top entry context
    pub fn matches_entry(&self, option: &str, target: &str) -> bool {
        self.matches(option, target, "", "")
    }
}

impl FromStr for Rule {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.option, self.target)?;
        if self.top_option != Matcher::Ignore || self.top_target != Matcher::Ignore {
            write!(f, ",{}", self.top_option)?;
        }
        if self.top_target != Matcher::Ignore {
            write!(f, ",{}", self.top_target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MatcherKind;

    #[test]
    fn test_four_field_round_trip() {
        let rule = Rule::parse("a,b,c,d");
        assert!(rule.matches("a", "b", "c", "d"));
        assert!(!rule.matches("x", "b", "c", "d"));
        assert!(!rule.matches("a", "b", "c", "x"));
    }

    #[test]
    fn test_fields_are_trimmed_and_lowercased() {
        let rule = Rule::parse("  Walk Here ,  <Col>Tree ");
        assert_eq!(rule.option, Matcher::Equals("walk here".to_string()));
        assert_eq!(rule.target, Matcher::Equals("<col>tree".to_string()));
    }

    #[test]
    fn test_missing_fields() {
        let rule = Rule::parse("walk here");
        assert_eq!(rule.target, Matcher::Equals(String::new()));
        assert_eq!(rule.top_option.kind(), MatcherKind::Ignore);
        assert_eq!(rule.top_target.kind(), MatcherKind::Ignore);

        assert!(rule.matches_entry("walk here", ""));
        assert!(!rule.matches_entry("walk here", "tree"));
    }

    #[test]
    fn test_trailing_empty_fields_are_dropped() {
        assert_eq!(Rule::parse("use,sword,,"), Rule::parse("use,sword"));
        assert_eq!(Rule::parse("use,"), Rule::parse("use"));
        // a lone comma degrades to an empty option
        assert_eq!(Rule::parse(","), Rule::parse(""));
    }

    #[test]
    fn test_blank_middle_field_is_kept() {
        let rule = Rule::parse("use,,*");
        assert_eq!(rule.target, Matcher::Equals(String::new()));
        assert_eq!(rule.top_option, Matcher::Ignore);
    }

    #[test]
    fn test_top_context() {
        let rule = Rule::parse("*,*,attack,*goblin*");
        assert!(rule.matches("walk here", "", "attack", "goblin (level-2)"));
        assert!(!rule.matches("walk here", "", "talk-to", "goblin (level-2)"));
        // the two-field form passes empty top text
        assert!(!rule.matches_entry("walk here", ""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::parse("Use,*Sword").to_string(), "use,*sword");
        assert_eq!(Rule::parse("a,b,c").to_string(), "a,b,c");
        assert_eq!(Rule::parse("a,b,*,d").to_string(), "a,b,*,d");
    }
}
