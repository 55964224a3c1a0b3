//! Hide filtering and top-slot promotion

use log::trace;

use super::host::EntryPolicy;
use crate::rules::RuleSet;
use crate::text;
use crate::types::MenuEntry;

/// What the promotion step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// No entry matched a promotion rule
    NoMatch,
    /// The winning entry was already on top
    AlreadyTop(usize),
    /// The entry at `from` was exchanged with the top entry
    Swapped { from: usize, to: usize },
    /// The winner or the top entry is protected
    Protected,
    /// The top entry may not be replaced as the left-click action
    UnsafeTop,
}

/// Standardized (option, target) of the top entry, used as rule context
fn top_context(entries: &[MenuEntry]) -> Option<(String, String)> {
    entries
        .last()
        .map(|top| (text::standardize(&top.option), text::standardize(&top.target)))
}

/// Drops entries matched by a hide rule, keeping the order of the rest
pub fn filter_entries(entries: Vec<MenuEntry>, hides: &RuleSet, policy: &dyn EntryPolicy) -> Vec<MenuEntry> {
    let Some((top_option, top_target)) = top_context(&entries) else {
        return entries;
    };
    if hides.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| {
            let option = text::standardize(&text::remove_tags(&entry.option));
            let target = text::standardize(&text::remove_tags(&entry.target));
            let hidden = hides.rank_match(&option, &target, &top_option, &top_target);
            if let Some(rank) = hidden {
                trace!("hide rule {} matches {}", rank, entry);
            }
            hidden.is_none() || policy.is_protected(entry)
        })
        .collect()
}

/// Picks the entry to promote.
///
/// Walks from the top down and only replaces the current pick on a
/// strictly greater rank. Equal ranks therefore favour the entry nearest
/// the top, and a later-declared rule matching deeper in the menu beats an
/// earlier rule matching higher up.
pub fn entry_index_to_swap(entries: &[MenuEntry], swaps: &RuleSet) -> Option<usize> {
    let (top_option, top_target) = top_context(entries)?;
    let mut best: Option<(usize, usize)> = None;

    for (index, entry) in entries.iter().enumerate().rev() {
        let option = text::standardize(&entry.option);
        let target = text::standardize(&entry.target);
        let Some(rank) = swaps.rank_match(&option, &target, &top_option, &top_target) else {
            continue;
        };
        if best.map_or(true, |(_, best_rank)| rank > best_rank) {
            best = Some((index, rank));
        }
    }

    best.map(|(index, _)| index)
}

/// Moves the best-ranked entry into the top slot.
///
/// Only the winner and the old top entry change position. A low priority
/// winner is rewritten to its normal priority kind so a left click on it
/// does not reopen the menu.
pub fn promote(entries: &mut [MenuEntry], swaps: &RuleSet, policy: &dyn EntryPolicy) -> Promotion {
    let Some(top_index) = entries.len().checked_sub(1) else {
        return Promotion::NoMatch;
    };
    if policy.may_not_be_left_click(&entries[top_index]) {
        return Promotion::UnsafeTop;
    }

    let Some(index) = entry_index_to_swap(entries, swaps) else {
        return Promotion::NoMatch;
    };
    if policy.is_protected(&entries[top_index]) || policy.is_protected(&entries[index]) {
        return Promotion::Protected;
    }

    let winner = &mut entries[index];
    if winner.kind.is_low_priority() {
        winner.kind = winner.kind.normal_priority();
    }

    if index < top_index {
        entries.swap(index, top_index);
        Promotion::Swapped {
            from: index,
            to: top_index,
        }
    } else {
        Promotion::AlreadyTop(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::DefaultPolicy;
    use crate::types::MenuAction;

    #[test]
    fn test_filter_uses_top_context() {
        let entries = vec![
            MenuEntry::op("Walk here", ""),
            MenuEntry::op("Examine", "Goblin"),
            MenuEntry::op("Attack", "Goblin"),
        ];
        let hides = RuleSet::parse("walk here,*,attack");
        let kept = filter_entries(entries, &hides, &DefaultPolicy);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].option, "Examine");
    }

    #[test]
    fn test_filter_strips_tags_from_entries() {
        let entries = vec![
            MenuEntry::op("Take", "<col=ff9040>Coins"),
            MenuEntry::op("Walk here", ""),
        ];
        let kept = filter_entries(entries, &RuleSet::parse("take,coins"), &DefaultPolicy);
        assert_eq!(kept, vec![MenuEntry::op("Walk here", "")]);
    }

    #[test]
    fn test_promotion_keeps_equal_rank_nearest_top() {
        let entries = vec![
            MenuEntry::op("Use", "Rock"),
            MenuEntry::op("Mine", "Rock"),
            MenuEntry::op("Walk here", ""),
        ];
        let swaps = RuleSet::parse("*,rock");
        assert_eq!(entry_index_to_swap(&entries, &swaps), Some(1));
    }

    #[test]
    fn test_low_priority_winner_on_top_is_rewritten() {
        let mut entries = vec![
            MenuEntry::op("Examine", "Lamp"),
            MenuEntry::new("Rub", "Lamp", MenuAction::CcOpLowPriority),
        ];
        let result = promote(&mut entries, &RuleSet::parse("rub,lamp"), &DefaultPolicy);
        assert_eq!(result, Promotion::AlreadyTop(1));
        assert_eq!(entries[1].kind, MenuAction::CcOp);
    }

    #[test]
    fn test_promote_empty() {
        let mut entries: Vec<MenuEntry> = Vec::new();
        assert_eq!(promote(&mut entries, &RuleSet::parse("a"), &DefaultPolicy), Promotion::NoMatch);
    }
}
