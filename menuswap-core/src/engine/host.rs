//! Host-facing collaborator traits

use crate::types::MenuEntry;

/// Access to the host's menu and key state
pub trait MenuHost {
    /// Current menu entries, top entry last
    fn menu_entries(&self) -> Vec<MenuEntry>;

    /// Replaces the host's menu entries
    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>);

    /// Checks if the swap modifier (shift) is held
    fn is_modifier_held(&self) -> bool;
}

/// Policy hooks consulted during a pass
pub trait EntryPolicy {
    /// Entries that must never be hidden or moved
    fn is_protected(&self, _entry: &MenuEntry) -> bool {
        false
    }

    /// Top entries that must not have another entry swapped over them
    fn may_not_be_left_click(&self, _entry: &MenuEntry) -> bool {
        false
    }
}

/// Policy that protects nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl EntryPolicy for DefaultPolicy {}

/// In-memory host, useful for tests and for hosts that marshal entries
/// themselves
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub entries: Vec<MenuEntry>,
    pub modifier_held: bool,
    commits: usize,
}

impl MemoryHost {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            modifier_held: false,
            commits: 0,
        }
    }

    pub fn with_modifier(mut self, held: bool) -> Self {
        self.modifier_held = held;
        self
    }

    /// Number of `set_menu_entries` calls so far
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl MenuHost for MemoryHost {
    fn menu_entries(&self) -> Vec<MenuEntry> {
        self.entries.clone()
    }

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>) {
        self.entries = entries;
        self.commits += 1;
    }

    fn is_modifier_held(&self) -> bool {
        self.modifier_held
    }
}
