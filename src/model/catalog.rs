// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Typed catalog: option groups and variants with already-extracted scalars.
//!
//! # Examples
//!
//! ```
//! use sku_select::model::Catalog;
//!
//! let catalog = Catalog::new()
//!     .group("Color", ["Red", "Blue"])
//!     .group("Size", ["S", "M"])
//!     .variant("V1", ["Red", "S"])
//!     .variant("V2", ["Red", "M"])
//!     .variant("V3", ["Blue", "S"]);
//!
//! assert_eq!(catalog.groups.len(), 2);
//! assert_eq!(catalog.variants.len(), 3);
//! assert_eq!(catalog.value_count(), 4);
//! ```

use crate::model::{OptionValue, VariantId};
use serde::{Deserialize, Serialize};

/// A named axis of choice holding mutually exclusive values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub name: String,
    pub values: Vec<OptionValue>,
}

impl OptionGroup {
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &OptionValue) -> bool {
        self.values.contains(value)
    }
}

/// One concrete catalog item and the option values that define it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub values: Vec<OptionValue>,
}

impl Variant {
    pub fn new<D, I, V>(id: D, values: I) -> Self
    where
        D: Into<VariantId>,
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        Self {
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered option groups plus ordered variants.
///
/// Group order is significant: it is the slot index of a selection. Variant
/// order is the tie-break order when two variants share a code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<OptionGroup>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option group (builder style).
    pub fn group<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        self.groups.push(OptionGroup::new(name, values));
        self
    }

    /// Append a variant (builder style).
    pub fn variant<D, I, V>(mut self, id: D, values: I) -> Self
    where
        D: Into<VariantId>,
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        self.variants.push(Variant::new(id, values));
        self
    }

    /// Parse a typed catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Total number of (group, value) occurrences, duplicates included.
    pub fn value_count(&self) -> usize {
        self.groups.iter().map(|group| group.values.len()).sum()
    }
}
