//! Menu entry snapshot with an option → positions index
//!
//! The entries vector is the source of truth. The index only stores
//! positions into it and is repaired after every swap, since later lookups
//! in the same pass depend on it.

use std::collections::{BTreeSet, HashMap};

use log::{trace, warn};

use super::host::MenuHost;
use crate::error::{Error, Result};
use crate::text;
use crate::types::{MenuAction, MenuEntry};

pub struct IndexedEntryList<'h, H: MenuHost + ?Sized> {
    host: &'h mut H,
    entries: Vec<MenuEntry>,
    /// Normalized option → ascending positions holding it
    option_index: HashMap<String, Vec<usize>>,
}

impl<'h, H: MenuHost + ?Sized> IndexedEntryList<'h, H> {
    /// Reads the host's entries and indexes them in one pass
    pub fn snapshot(host: &'h mut H) -> Self {
        let entries = host.menu_entries();
        let option_index = build_index(&entries);
        Self {
            host,
            entries,
            option_index,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions currently holding `option`, ascending
    pub fn positions(&self, option: &str) -> &[usize] {
        self.option_index
            .get(&text::normalize(option))
            .map_or(&[][..], |bucket| bucket.as_slice())
    }

    /// Finds the highest position below `before` whose target equals
    /// `target` and whose option matches `option`.
    ///
    /// Strict mode requires an exact option and walks the index bucket.
    /// Loose mode accepts any option containing `option` and has to scan
    /// every entry below `before`.
    pub fn find_last(&self, option: &str, before: usize, target: &str, strict: bool) -> Option<usize> {
        let option = text::normalize(option);
        let target = text::normalize(target);
        let before = before.min(self.entries.len());

        if strict {
            let bucket = self.option_index.get(&option)?;
            let end = bucket.partition_point(|&pos| pos < before);
            bucket[..end]
                .iter()
                .rev()
                .copied()
                .find(|&pos| text::normalize(&self.entries[pos].target) == target)
        } else {
            (0..before).rev().find(|&pos| {
                let entry = &self.entries[pos];
                text::normalize(&entry.option).contains(&option)
                    && text::normalize(&entry.target) == target
            })
        }
    }

    /// Finds the highest position below `before` with the given action
    /// kind and target
    pub fn find_last_by_action(&self, kind: MenuAction, before: usize, target: &str) -> Option<usize> {
        let target = text::normalize(target);
        let before = before.min(self.entries.len());

        (0..before).rev().find(|&pos| {
            let entry = &self.entries[pos];
            entry.kind == kind && text::normalize(&entry.target) == target
        })
    }

    /// Exchanges two entries, writes the result through to the host and
    /// repairs the two affected index buckets.
    ///
    /// Returns false when either position is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.entries.len() || b >= self.entries.len() {
            warn!("swap {} <-> {} out of range for {} entries", a, b, self.entries.len());
            return false;
        }
        if a == b {
            return true;
        }

        let option_a = text::normalize(&self.entries[a].option);
        let option_b = text::normalize(&self.entries[b].option);
        trace!("swapping {:?}@{} with {:?}@{}", option_a, a, option_b, b);

        self.entries.swap(a, b);
        self.host.set_menu_entries(self.entries.clone());

        // Remove both old positions before inserting, so a shared bucket
        // never holds a position twice
        self.bucket(&option_a, |bucket| remove_sorted(bucket, a));
        self.bucket(&option_b, |bucket| remove_sorted(bucket, b));
        self.bucket(&option_a, |bucket| insert_sorted(bucket, b));
        self.bucket(&option_b, |bucket| insert_sorted(bucket, a));
        true
    }

    /// Checks the index against a fresh rebuild
    pub fn verify(&self) -> Result<()> {
        let expected = build_index(&self.entries);
        let options: BTreeSet<&String> = expected.keys().chain(self.option_index.keys()).collect();

        for option in options {
            let want = expected.get(option).map_or(&[][..], |b| b.as_slice());
            let have = self.option_index.get(option).map_or(&[][..], |b| b.as_slice());
            if want != have {
                return Err(Error::IndexDesync {
                    option: option.clone(),
                    expected: want.to_vec(),
                    actual: have.to_vec(),
                });
            }
        }
        Ok(())
    }

    pub fn into_entries(self) -> Vec<MenuEntry> {
        self.entries
    }

    fn bucket(&mut self, option: &str, f: impl FnOnce(&mut Vec<usize>)) {
        f(self.option_index.entry(option.to_string()).or_default());
    }
}

fn build_index(entries: &[MenuEntry]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, entry) in entries.iter().enumerate() {
        index.entry(text::normalize(&entry.option)).or_default().push(pos);
    }
    index
}

fn remove_sorted(bucket: &mut Vec<usize>, pos: usize) {
    if let Ok(i) = bucket.binary_search(&pos) {
        bucket.remove(i);
    }
}

fn insert_sorted(bucket: &mut Vec<usize>, pos: usize) {
    let (Ok(i) | Err(i)) = bucket.binary_search(&pos);
    bucket.insert(i, pos);
}
