//! Result of one evaluation pass

use super::promote::Promotion;

/// What a pass did to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassOutcome {
    /// Entries removed by hide rules
    pub hidden: usize,
    /// Promotion result; `None` when promotion never ran
    pub promotion: Option<Promotion>,
    /// Swaps made by registered option swaps
    pub option_swaps: usize,
    /// Whether the custom pass wrote the menu back to the host
    pub committed: bool,
}

impl PassOutcome {
    /// Nothing to do, the host was not touched
    pub fn skipped() -> Self {
        Self::default()
    }

    /// Checks if any entry moved or disappeared
    pub fn changed_menu(&self) -> bool {
        self.hidden > 0
            || self.option_swaps > 0
            || matches!(self.promotion, Some(Promotion::Swapped { .. }))
    }
}
