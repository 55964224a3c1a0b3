//! Single-field pattern compilation

use std::fmt;

use log::warn;
use logos::Logos;
use regex::{Regex, RegexBuilder};

/// How a rule field is compared against menu text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    Equals,
    Prefix,
    Suffix,
    Contains,
    Wildcard,
    Ignore,
}

impl MatcherKind {
    /// Derives the kind from where the `*` characters sit.
    ///
    /// An absent field is `Ignore`. The checks run in a fixed order and
    /// every input lands on exactly one kind.
    pub fn of(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return MatcherKind::Ignore;
        };
        let Some(star) = text.find('*') else {
            return MatcherKind::Equals;
        };
        let last = text.len() - 1;

        if star == 0 {
            if text.len() == 1 {
                return MatcherKind::Ignore;
            }
            match text[1..].find('*').map(|i| i + 1) {
                None => return MatcherKind::Suffix,
                Some(next) if next == last => return MatcherKind::Contains,
                Some(_) => {}
            }
        } else if star == last {
            return MatcherKind::Prefix;
        }

        MatcherKind::Wildcard
    }
}

/// Splits wildcard text into literal runs and stars
#[derive(Logos, Debug, PartialEq, Clone)]
enum WildcardToken {
    #[token("*")]
    Star,

    #[regex(r"[^*]+")]
    Literal,
}

/// A compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct Wildcard {
    source: String,
    regex: Regex,
}

impl Wildcard {
    fn compile(source: &str) -> Result<Self, regex::Error> {
        let mut pattern = String::from("^(?:");
        let mut lex = WildcardToken::lexer(source);

        while let Some(token) = lex.next() {
            match token {
                Ok(WildcardToken::Star) => pattern.push_str(".*"),
                // Anything the lexer rejects is still literal text
                Ok(WildcardToken::Literal) | Err(_) => pattern.push_str(&regex::escape(lex.slice())),
            }
        }
        pattern.push_str(")$");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// A compiled rule field
#[derive(Debug, Clone)]
pub enum Matcher {
    Equals(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
    Wildcard(Wildcard),
    Ignore,
}

impl Matcher {
    /// Compiles one rule field. Never fails.
    pub fn compile(raw: Option<&str>) -> Self {
        let kind = MatcherKind::of(raw);
        let text = raw.unwrap_or_default();

        match kind {
            MatcherKind::Ignore => Matcher::Ignore,
            MatcherKind::Equals => Matcher::Equals(strip_stars(text)),
            MatcherKind::Prefix => Matcher::Prefix(strip_stars(text)),
            MatcherKind::Suffix => Matcher::Suffix(strip_stars(text)),
            MatcherKind::Contains => Matcher::Contains(strip_stars(text)),
            MatcherKind::Wildcard => match Wildcard::compile(text) {
                Ok(wildcard) => Matcher::Wildcard(wildcard),
                Err(err) => {
                    warn!("wildcard {:?} did not compile, matching literally: {}", text, err);
                    Matcher::Equals(strip_stars(text))
                }
            },
        }
    }

    /// Compiles a field that is present in the rule text
    pub fn parse(raw: &str) -> Self {
        Self::compile(Some(raw))
    }

    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Equals(_) => MatcherKind::Equals,
            Matcher::Prefix(_) => MatcherKind::Prefix,
            Matcher::Suffix(_) => MatcherKind::Suffix,
            Matcher::Contains(_) => MatcherKind::Contains,
            Matcher::Wildcard(_) => MatcherKind::Wildcard,
            Matcher::Ignore => MatcherKind::Ignore,
        }
    }

    /// Tests already-normalized menu text against this field
    pub fn test(&self, candidate: &str) -> bool {
        match self {
            Matcher::Ignore => true,
            Matcher::Equals(text) => candidate == text,
            Matcher::Prefix(text) => candidate.starts_with(text.as_str()),
            Matcher::Suffix(text) => candidate.ends_with(text.as_str()),
            Matcher::Contains(text) => candidate.contains(text.as_str()),
            Matcher::Wildcard(wildcard) => wildcard.regex.is_match(candidate),
        }
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matcher::Equals(a), Matcher::Equals(b))
            | (Matcher::Prefix(a), Matcher::Prefix(b))
            | (Matcher::Suffix(a), Matcher::Suffix(b))
            | (Matcher::Contains(a), Matcher::Contains(b)) => a == b,
            (Matcher::Wildcard(a), Matcher::Wildcard(b)) => a.source == b.source,
            (Matcher::Ignore, Matcher::Ignore) => true,
            _ => false,
        }
    }
}

impl Eq for Matcher {}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Equals(text) => f.write_str(text),
            Matcher::Prefix(text) => write!(f, "{}*", text),
            Matcher::Suffix(text) => write!(f, "*{}", text),
            Matcher::Contains(text) => write!(f, "*{}*", text),
            Matcher::Wildcard(wildcard) => f.write_str(&wildcard.source),
            Matcher::Ignore => f.write_str("*"),
        }
    }
}

fn strip_stars(text: &str) -> String {
    text.replace('*', "")
}
