mod common;

use std::collections::BTreeMap;

use common::*;
use menuswap_core::{text, IndexedEntryList, MemoryHost, MenuAction, MenuEntry};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_strict_find_prefers_matching_target() {
    let mut host = host_with(&[
        ("Walk here", ""),
        ("Examine", "Goblin"),
        ("Cast", "Wind Strike"),
        ("Attack", "Goblin"),
        ("Use", "Rope"),
        ("Cast", "<col=00ff00>Fire Strike"),
    ]);
    let list = IndexedEntryList::snapshot(&mut host);

    assert_eq!(list.positions("cast"), &[2, 5]);
    assert_eq!(list.find_last("cast", 6, "Fire Strike", true), Some(5));
    assert_eq!(list.find_last("cast", 6, "Wind Strike", true), Some(2));
    assert_eq!(list.find_last("cast", 2, "Wind Strike", true), None);
}

#[test]
fn test_loose_find_scans_below_limit() {
    let mut host = host_with(&[
        ("Pick-lots", "Flax"),
        ("Examine", "Flax"),
        ("Pick", "Flax"),
    ]);
    let list = IndexedEntryList::snapshot(&mut host);

    // the strict lookup has no "pick-" bucket; containment finds both
    assert_eq!(list.find_last("pick-", 3, "flax", true), None);
    assert_eq!(list.find_last("pick", 3, "flax", false), Some(2));
    assert_eq!(list.find_last("pick", 2, "flax", false), Some(0));
}

#[test]
fn test_find_by_action_kind() {
    let mut host = MemoryHost::new(vec![
        MenuEntry::new("Walk here", "", MenuAction::Walk),
        MenuEntry::new("Examine", "Tree", MenuAction::ExamineObject),
        MenuEntry::new("Chop down", "Tree", MenuAction::Other(3)),
    ]);
    let list = IndexedEntryList::snapshot(&mut host);

    assert_eq!(list.find_last_by_action(MenuAction::ExamineObject, 3, "tree"), Some(1));
    assert_eq!(list.find_last_by_action(MenuAction::ExamineObject, 1, "tree"), None);
    assert_eq!(list.find_last_by_action(MenuAction::Walk, 3, "tree"), None);
}

#[test]
fn test_limit_past_end_is_clamped() {
    let mut host = host_with(&[("Use", "Rope")]);
    let list = IndexedEntryList::snapshot(&mut host);
    assert_eq!(list.find_last("use", 100, "rope", true), Some(0));
    assert_eq!(list.find_last("use", 100, "rope", false), Some(0));
}

#[test]
fn test_each_swap_writes_through() {
    let mut host = host_with(&[("A", ""), ("B", ""), ("C", "")]);
    {
        let mut list = IndexedEntryList::snapshot(&mut host);
        list.swap(0, 2);
        list.swap(0, 1);
    }
    assert_eq!(host.commits(), 2);
    assert_eq!(labels(&host.entries), vec!["B/", "C/", "A/"]);
}

fn brute_force_index(entries: &[MenuEntry]) -> BTreeMap<String, Vec<usize>> {
    let mut index: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (pos, entry) in entries.iter().enumerate() {
        index.entry(text::normalize(&entry.option)).or_default().push(pos);
    }
    index
}

#[test]
fn test_index_stays_consistent_under_random_swaps() {
    init_logging();
    const OPTIONS: [&str; 6] = ["Cast", "<col=ff>Cast", "Use", "Examine", "Walk here", "Drop"];

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let len = rng.gen_range(1..25);
        let menu: Vec<MenuEntry> = (0..len)
            .map(|i| MenuEntry::op(OPTIONS[rng.gen_range(0..OPTIONS.len())], format!("t{}", i % 3)))
            .collect();
        let mut host = MemoryHost::new(menu);
        let mut list = IndexedEntryList::snapshot(&mut host);

        for _ in 0..40 {
            let a = rng.gen_range(0..len);
            let b = rng.gen_range(0..len);
            assert!(list.swap(a, b));

            if let Err(err) = list.verify() {
                panic!("index desync after swapping {} and {}: {}", a, b, err);
            }
            for (option, positions) in brute_force_index(list.entries()) {
                assert_eq!(list.positions(&option), positions.as_slice());
            }
        }

        let entries = list.into_entries();
        assert_eq!(entries, host.entries);
    }
}
