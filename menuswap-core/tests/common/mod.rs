#![allow(dead_code)]

use menuswap_core::{MemoryHost, MenuEntry, SwapConfig};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `CcOp` entries from (option, target) pairs, top entry last
pub fn entries(pairs: &[(&str, &str)]) -> Vec<MenuEntry> {
    pairs
        .iter()
        .map(|(option, target)| MenuEntry::op(*option, *target))
        .collect()
}

pub fn host_with(pairs: &[(&str, &str)]) -> MemoryHost {
    MemoryHost::new(entries(pairs))
}

/// "option/target" labels, handy for whole-menu comparisons
pub fn labels(entries: &[MenuEntry]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

pub fn config(swaps: &str, shift_swaps: &str, hides: &str) -> SwapConfig {
    SwapConfig {
        custom_swaps: swaps.to_string(),
        custom_shift_swaps: shift_swaps.to_string(),
        custom_hides: hides.to_string(),
    }
}
