//! User configuration surface
//!
//! Three multi-line text blocks, one rule per line. The host owns storage;
//! this module only names the keys and converts to and from TOML.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration group this engine listens to
pub const CONFIG_GROUP: &str = "hotkeyablemenuswaps";

pub const KEY_CUSTOM_SWAPS: &str = "customSwaps";
pub const KEY_CUSTOM_SHIFT_SWAPS: &str = "customShiftSwaps";
pub const KEY_CUSTOM_HIDES: &str = "customHides";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapConfig {
    /// Options to swap to the top
    pub custom_swaps: String,
    /// Options to swap to the top while the modifier is held
    pub custom_shift_swaps: String,
    /// Entries to remove before swapping
    pub custom_hides: String,
}

impl SwapConfig {
    /// Parses a TOML document; missing keys default to empty text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Looks up a field by its key name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            KEY_CUSTOM_SWAPS => Some(&self.custom_swaps),
            KEY_CUSTOM_SHIFT_SWAPS => Some(&self.custom_shift_swaps),
            KEY_CUSTOM_HIDES => Some(&self.custom_hides),
            _ => None,
        }
    }

    /// Sets a field by its key name
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = match key {
            KEY_CUSTOM_SWAPS => &mut self.custom_swaps,
            KEY_CUSTOM_SHIFT_SWAPS => &mut self.custom_shift_swaps,
            KEY_CUSTOM_HIDES => &mut self.custom_hides,
            _ => return Err(Error::UnknownConfigKey(key.to_string())),
        };
        *slot = value.into();
        Ok(())
    }
}

/// Notification that a configuration value changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChanged {
    pub group: String,
    pub key: String,
}

impl ConfigChanged {
    pub fn new(group: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            key: key.into(),
        }
    }

    /// Checks if the change belongs to this engine's group
    pub fn is_for_us(&self) -> bool {
        self.group == CONFIG_GROUP
    }
}
