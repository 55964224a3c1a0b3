//! Swaps keyed by option name
//!
//! A registration says: when the entry at some position has option X and
//! an accepted target, look below it for an entry with option Y (or action
//! kind K) and the same target, and swap that entry into its place.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use super::host::MenuHost;
use super::indexed::IndexedEntryList;
use crate::rules::Matcher;
use crate::text;
use crate::types::MenuAction;

/// Where a registered swap looks for its replacement entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapDestination {
    /// Entry with this option; exact option when `strict`, else containment
    Option { option: String, strict: bool },
    /// Entry with this action kind
    Action(MenuAction),
}

pub struct OptionSwap {
    target: Matcher,
    destination: SwapDestination,
    enabled: Box<dyn Fn() -> bool>,
}

impl OptionSwap {
    pub fn destination(&self) -> &SwapDestination {
        &self.destination
    }

    fn applies_to(&self, target: &str) -> bool {
        self.target.test(target) && (self.enabled)()
    }
}

impl fmt::Debug for OptionSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSwap")
            .field("target", &self.target)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

/// Registered option swaps, in registration order per option
#[derive(Debug, Default)]
pub struct OptionSwaps {
    swaps: HashMap<String, Vec<OptionSwap>>,
}

impl OptionSwaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a strict swap: `swapped_option` must equal the option
    /// exactly after normalization
    pub fn swap(
        &mut self,
        option: &str,
        target: &str,
        swapped_option: &str,
        enabled: impl Fn() -> bool + 'static,
    ) -> &mut Self {
        let destination = SwapDestination::Option {
            option: text::normalize(swapped_option),
            strict: true,
        };
        self.register(option, target, destination, enabled)
    }

    /// Registers a loose swap: any option containing `swapped_option`
    pub fn swap_contains(
        &mut self,
        option: &str,
        target: &str,
        swapped_option: &str,
        enabled: impl Fn() -> bool + 'static,
    ) -> &mut Self {
        let destination = SwapDestination::Option {
            option: text::normalize(swapped_option),
            strict: false,
        };
        self.register(option, target, destination, enabled)
    }

    /// Registers a swap to the entry with the given action kind
    pub fn swap_action(
        &mut self,
        option: &str,
        target: &str,
        kind: MenuAction,
        enabled: impl Fn() -> bool + 'static,
    ) -> &mut Self {
        self.register(option, target, SwapDestination::Action(kind), enabled)
    }

    fn register(
        &mut self,
        option: &str,
        target: &str,
        destination: SwapDestination,
        enabled: impl Fn() -> bool + 'static,
    ) -> &mut Self {
        let swap = OptionSwap {
            target: Matcher::parse(&target.trim().to_lowercase()),
            destination,
            enabled: Box::new(enabled),
        };
        self.swaps.entry(text::normalize(option)).or_default().push(swap);
        self
    }

    /// Registrations for an option, in registration order
    pub fn get(&self, option: &str) -> &[OptionSwap] {
        self.swaps
            .get(&text::normalize(option))
            .map_or(&[][..], |swaps| swaps.as_slice())
    }

    pub fn len(&self) -> usize {
        self.swaps.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    pub fn clear(&mut self) {
        self.swaps.clear();
    }

    /// Runs every position through its registrations, lowest first.
    /// Returns the number of swaps made.
    pub fn apply<H: MenuHost + ?Sized>(&self, list: &mut IndexedEntryList<'_, H>) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut swapped = 0;
        for index in 0..list.len() {
            if self.swap_menu_entry(list, index) {
                swapped += 1;
            }
        }
        swapped
    }

    fn swap_menu_entry<H: MenuHost + ?Sized>(&self, list: &mut IndexedEntryList<'_, H>, index: usize) -> bool {
        let entry = &list.entries()[index];
        let target = text::normalize(&entry.target);

        for swap in self.get(&entry.option) {
            if !swap.applies_to(&target) {
                continue;
            }

            let found = match &swap.destination {
                SwapDestination::Option { option, strict } => list.find_last(option, index, &target, *strict),
                SwapDestination::Action(kind) => list.find_last_by_action(*kind, index, &target),
            };
            if let Some(found) = found {
                trace!("option swap {:?} moves {} to {}", swap.destination, found, index);
                return list.swap(found, index);
            }
        }

        false
    }
}
