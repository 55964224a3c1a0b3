use std::sync::Arc;

use log::{debug, trace};

use crate::{
    config::{ConfigChanged, SwapConfig},
    rules::RuleBundle,
};
use super::{
    host::{DefaultPolicy, EntryPolicy, MenuHost},
    indexed::IndexedEntryList,
    option_swaps::OptionSwaps,
    output::PassOutcome,
    promote::{filter_entries, promote},
    state::LoadState,
};

/// The main menu swap engine
pub struct SwapEngine {
    /// Whether rules have been loaded
    state: LoadState,
    /// Current rules; replaced wholesale on reload
    rules: Arc<RuleBundle>,
    /// Swaps registered by option name
    option_swaps: OptionSwaps,
    /// Protection hooks
    policy: Box<dyn EntryPolicy>,
}

impl Default for SwapEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapEngine {
    /// Create an engine with no rules loaded
    pub fn new() -> Self {
        Self::with_policy(DefaultPolicy)
    }

    /// Create an engine with custom protection hooks
    pub fn with_policy(policy: impl EntryPolicy + 'static) -> Self {
        Self {
            state: LoadState::Unloaded,
            rules: Arc::new(RuleBundle::default()),
            option_swaps: OptionSwaps::new(),
            policy: Box::new(policy),
        }
    }

    /// Load rules for the first time
    pub fn start(&mut self, config: &SwapConfig) {
        self.reload(config);
    }

    /// Drop all rules and go back to the unloaded state
    pub fn shut_down(&mut self) {
        self.rules = Arc::new(RuleBundle::default());
        self.state = LoadState::Unloaded;
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Snapshot of the current rules
    pub fn rules(&self) -> Arc<RuleBundle> {
        Arc::clone(&self.rules)
    }

    pub fn option_swaps(&self) -> &OptionSwaps {
        &self.option_swaps
    }

    pub fn option_swaps_mut(&mut self) -> &mut OptionSwaps {
        &mut self.option_swaps
    }

    /// Rebuild all three rule sets from `config`
    pub fn reload(&mut self, config: &SwapConfig) {
        self.rules = Arc::new(RuleBundle::from_config(config));
        self.state = LoadState::Loaded;
    }

    /// Reload when the change belongs to our group. Returns true if the
    /// rules were rebuilt.
    pub fn on_config_changed(&mut self, event: &ConfigChanged, config: &SwapConfig) -> bool {
        if !event.is_for_us() {
            return false;
        }
        debug!("config key {:?} changed, reloading rules", event.key);
        self.reload(config);
        true
    }

    /// Handle the "menu about to be shown" notification.
    ///
    /// Must run after any other swapper has already reordered the menu.
    pub fn on_post_menu_sort<H: MenuHost + ?Sized>(&self, host: &mut H) -> PassOutcome {
        let mut outcome = self.custom_swaps(host);
        outcome.option_swaps = self.apply_option_swaps(host);
        outcome
    }

    /// Hide, then promote, then write back once
    pub fn custom_swaps<H: MenuHost + ?Sized>(&self, host: &mut H) -> PassOutcome {
        let rules = Arc::clone(&self.rules);

        let entries = host.menu_entries();
        if entries.is_empty() {
            return PassOutcome::skipped();
        }

        let before = entries.len();
        let mut entries = filter_entries(entries, &rules.hides, self.policy.as_ref());
        let hidden = before - entries.len();

        if entries.is_empty() {
            trace!("hide rules removed all {} entries", before);
            host.set_menu_entries(entries);
            return PassOutcome {
                hidden,
                committed: true,
                ..PassOutcome::default()
            };
        }

        let swaps = rules.promotions(host.is_modifier_held());
        let promotion = promote(&mut entries, swaps, self.policy.as_ref());
        trace!("hid {} entries, promotion {:?}", hidden, promotion);

        host.set_menu_entries(entries);
        PassOutcome {
            hidden,
            promotion: Some(promotion),
            option_swaps: 0,
            committed: true,
        }
    }

    /// Run registered option swaps over the host's current menu
    pub fn apply_option_swaps<H: MenuHost + ?Sized>(&self, host: &mut H) -> usize {
        if self.option_swaps.is_empty() {
            return 0;
        }
        let mut list = IndexedEntryList::snapshot(host);
        self.option_swaps.apply(&mut list)
    }
}
