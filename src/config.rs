// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selector configuration.
//!
//! Everything here has a default, so an empty JSON object is a valid
//! configuration:
//!
//! ```
//! use sku_select::config::{SelectorConfig, ValueKeying};
//! use sku_select::engine::CompatibilityMode;
//!
//! let config = SelectorConfig::from_json("{}").unwrap();
//! assert_eq!(config.record_keys.id_key, "id");
//! assert_eq!(config.record_keys.value_key, "value");
//! assert_eq!(config.keying, ValueKeying::PerGroup);
//! assert_eq!(config.compatibility, CompatibilityMode::Pairwise);
//!
//! let config = SelectorConfig::from_json(
//!     r#"{"keying": "shared-value", "compatibility": "joint", "record_keys": {"id_key": "sku"}}"#,
//! ).unwrap();
//! assert_eq!(config.record_keys.id_key, "sku");
//! assert_eq!(config.keying, ValueKeying::SharedValue);
//! assert_eq!(config.compatibility, CompatibilityMode::Joint);
//! ```

use crate::engine::CompatibilityMode;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Field names used to read field-keyed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordKeys {
    /// Field holding a variant's identity.
    pub id_key: String,
    /// Field holding an option value inside an option record.
    pub value_key: String,
    /// Field holding a group's display name.
    pub group_name_key: String,
    /// Field holding a group's list of option records.
    pub group_values_key: String,
    /// Field holding a variant's list of option values.
    pub variant_values_key: String,
}

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            id_key: "id".to_owned(),
            value_key: "value".to_owned(),
            group_name_key: "group".to_owned(),
            group_values_key: "values".to_owned(),
            variant_values_key: "values".to_owned(),
        }
    }
}

/// How option values are keyed when primes are assigned.
///
/// - `PerGroup`: the key is (group, value). "M" in a Size group and "M" in a
///   Finish group get different primes.
/// - `SharedValue`: the key is the value alone and the later group wins. Both
///   "M"s share one prime and resolve to the first group offering it. Use this
///   only for parity with catalogs encoded that way.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ValueKeying {
    #[default]
    PerGroup,
    SharedValue,
}

/// Top-level configuration for building a catalog index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub record_keys: RecordKeys,
    pub keying: ValueKeying,
    pub compatibility: CompatibilityMode,
}

impl SelectorConfig {
    /// Parse a configuration from JSON text. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_keying(mut self, keying: ValueKeying) -> Self {
        self.keying = keying;
        self
    }

    pub fn with_compatibility(mut self, compatibility: CompatibilityMode) -> Self {
        self.compatibility = compatibility;
        self
    }

    pub fn with_record_keys(mut self, record_keys: RecordKeys) -> Self {
        self.record_keys = record_keys;
        self
    }
}
