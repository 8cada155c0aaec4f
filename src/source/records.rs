// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Field-keyed JSON records as a catalog source.
//!
//! Groups and variants arrive as JSON objects. With the default
//! [`RecordKeys`], a catalog looks like:
//!
//! ```json
//! {
//!   "groups":   [{"group": "Color", "values": [{"value": "Red"}, {"value": "Blue"}]}],
//!   "variants": [{"id": "V1", "values": ["Red"], "price": 10}]
//! }
//! ```
//!
//! Variants keep every other field untouched, so the full record can be handed
//! back once a selection resolves. When the records are shaped differently,
//! [`RecordCatalog::with_group_values`] and
//! [`RecordCatalog::with_variant_values`] replace the list lookups.

use crate::config::RecordKeys;
use crate::error::CatalogError;
use crate::model::{OptionValue, Scalar, VariantId};
use crate::source::CatalogSource;
use serde_json::Value;
use std::fmt;

/// Extracts a list of entries from a group or variant record.
pub type ValuesFn = Box<dyn Fn(&Value) -> Vec<Value> + Send + Sync>;

/// Catalog made of field-keyed JSON records.
pub struct RecordCatalog {
    groups: Vec<Value>,
    variants: Vec<Value>,
    keys: RecordKeys,
    group_values: Option<ValuesFn>,
    variant_values: Option<ValuesFn>,
}

impl RecordCatalog {
    pub fn new(groups: Vec<Value>, variants: Vec<Value>, keys: RecordKeys) -> Self {
        Self {
            groups,
            variants,
            keys,
            group_values: None,
            variant_values: None,
        }
    }

    /// Build from a `{"groups": [...], "variants": [...]}` document.
    pub fn from_document(document: &Value, keys: RecordKeys) -> Result<Self, CatalogError> {
        let groups = list_field(document, "catalog", 0, "groups")?;
        let variants = match document.get("variants") {
            None | Some(Value::Null) => Vec::new(),
            Some(_) => list_field(document, "catalog", 0, "variants")?,
        };
        Ok(Self::new(groups, variants, keys))
    }

    /// Replace the lookup of a group's option records.
    pub fn with_group_values<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Vec<Value> + Send + Sync + 'static,
    {
        self.group_values = Some(Box::new(f));
        self
    }

    /// Replace the lookup of a variant's option values.
    pub fn with_variant_values<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Vec<Value> + Send + Sync + 'static,
    {
        self.variant_values = Some(Box::new(f));
        self
    }

    pub fn keys(&self) -> &RecordKeys {
        &self.keys
    }

    /// Consume the catalog, keeping only the variant records.
    pub fn into_variants(self) -> Vec<Value> {
        self.variants
    }

    /// Read an option value from one entry.
    ///
    /// Entries are option records (`{"value": "Red"}`) or bare scalars.
    fn option_value(
        &self,
        record: &'static str,
        index: usize,
        entry: &Value,
    ) -> Result<OptionValue, CatalogError> {
        if entry.is_object() {
            scalar_field(entry, record, index, &self.keys.value_key)
        } else {
            Scalar::from_json(entry).ok_or_else(|| CatalogError::NotAScalar {
                record,
                index,
                key: self.keys.value_key.clone(),
                found: entry.to_string(),
            })
        }
    }
}

impl fmt::Debug for RecordCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCatalog")
            .field("groups", &self.groups.len())
            .field("variants", &self.variants.len())
            .field("keys", &self.keys)
            .field("custom_group_values", &self.group_values.is_some())
            .field("custom_variant_values", &self.variant_values.is_some())
            .finish()
    }
}

impl CatalogSource for RecordCatalog {
    type Group = Value;
    type Variant = Value;

    fn groups(&self) -> &[Value] {
        &self.groups
    }

    fn variants(&self) -> &[Value] {
        &self.variants
    }

    fn group_name(&self, index: usize, group: &Value) -> Result<String, CatalogError> {
        Ok(match group.get(&self.keys.group_name_key) {
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
            None => format!("group {}", index),
        })
    }

    fn values_of_group(
        &self,
        index: usize,
        group: &Value,
    ) -> Result<Vec<OptionValue>, CatalogError> {
        let entries = match &self.group_values {
            Some(f) => f(group),
            None => list_field(group, "group", index, &self.keys.group_values_key)?,
        };
        entries
            .iter()
            .map(|entry| self.option_value("group", index, entry))
            .collect()
    }

    fn values_of_variant(
        &self,
        index: usize,
        variant: &Value,
    ) -> Result<Vec<OptionValue>, CatalogError> {
        let entries = match &self.variant_values {
            Some(f) => f(variant),
            None => list_field(variant, "variant", index, &self.keys.variant_values_key)?,
        };
        entries
            .iter()
            .map(|entry| self.option_value("variant", index, entry))
            .collect()
    }

    fn id_of(&self, index: usize, variant: &Value) -> Result<VariantId, CatalogError> {
        scalar_field(variant, "variant", index, &self.keys.id_key)
    }
}

/// Read the scalar at `key`, if the record has one.
pub(crate) fn scalar_at(record: &Value, key: &str) -> Option<Scalar> {
    record.get(key).and_then(Scalar::from_json)
}

fn scalar_field(
    record: &Value,
    kind: &'static str,
    index: usize,
    key: &str,
) -> Result<Scalar, CatalogError> {
    let field = record.get(key).ok_or_else(|| CatalogError::MissingField {
        record: kind,
        index,
        key: key.to_owned(),
    })?;
    Scalar::from_json(field).ok_or_else(|| CatalogError::NotAScalar {
        record: kind,
        index,
        key: key.to_owned(),
        found: field.to_string(),
    })
}

fn list_field(
    record: &Value,
    kind: &'static str,
    index: usize,
    key: &str,
) -> Result<Vec<Value>, CatalogError> {
    match record.get(key) {
        Some(Value::Array(entries)) => Ok(entries.clone()),
        Some(_) => Err(CatalogError::NotAList {
            record: kind,
            index,
            key: key.to_owned(),
        }),
        None => Err(CatalogError::MissingField {
            record: kind,
            index,
            key: key.to_owned(),
        }),
    }
}
