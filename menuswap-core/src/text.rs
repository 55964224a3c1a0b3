//! Host text normalization
//!
//! Menu labels carry `<col=ff9040>`-style markup and non-breaking spaces.
//! Matching depends on the exact normalized text, so these mirror the
//! host's own helpers.

/// Strips every `<...>` tag, keeping the text between them
pub fn remove_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Replaces non-breaking spaces, trims and lowercases.
///
/// Tags are left in place; callers that need them gone wrap the input in
/// [`remove_tags`] first.
pub fn standardize(text: &str) -> String {
    text.replace('\u{00A0}', " ").trim().to_lowercase()
}

/// Tag-stripped, lowercased form used for option lookups
pub fn normalize(text: &str) -> String {
    remove_tags(text).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_tags() {
        assert_eq!(remove_tags("<col=ffff00>Goblin<col=ff00>  (level-2)"), "Goblin  (level-2)");
        assert_eq!(remove_tags("plain"), "plain");
        assert_eq!(remove_tags("<img=1>"), "");
    }

    #[test]
    fn test_standardize_keeps_tags() {
        assert_eq!(standardize("  Bank\u{00A0}Booth "), "bank booth");
        assert_eq!(standardize("<col=ff>Rock"), "<col=ff>rock");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("<col=00ffff>Fire Strike</col>"), "fire strike");
    }
}
