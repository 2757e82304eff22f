//! Built-in defaults (layer 1)
//!
//! Hardcoded defaults for all configuration values.

use cnmerge_classifier::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Modifier separator (default: ":")
    pub separator: String,

    /// Start from the built-in utility taxonomy (default: true)
    pub use_default_groups: bool,

    /// Collapse duplicate unrecognized classes (default: false)
    pub dedupe_unknown: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            use_default_groups: true,
            dedupe_unknown: false,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "separator": self.separator,
            "use_default_groups": self.use_default_groups,
            "dedupe_unknown": self.dedupe_unknown,
        })
    }
}
