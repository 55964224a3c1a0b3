//! Menu swap engine
//!
//! Filters and reorders menu entries according to the loaded rule sets.
//! Everything runs synchronously inside the host's notification handlers.

mod engine;
mod host;
mod indexed;
mod option_swaps;
mod output;
mod promote;
mod state;

pub use engine::SwapEngine;
pub use host::{DefaultPolicy, EntryPolicy, MemoryHost, MenuHost};
pub use indexed::IndexedEntryList;
pub use option_swaps::{OptionSwap, OptionSwaps, SwapDestination};
pub use output::PassOutcome;
pub use promote::{entry_index_to_swap, filter_entries, promote, Promotion};
pub use state::LoadState;

// Re-export error types
pub use crate::error::{Error, Result};
