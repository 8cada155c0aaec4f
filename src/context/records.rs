// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selector over field-keyed records that hands back the matching record.

use crate::config::SelectorConfig;
use crate::context::Selector;
use crate::error::{CatalogError, SelectionError};
use crate::model::OptionValue;
use crate::source::records::scalar_at;
use crate::source::RecordCatalog;
use crate::state::Toggle;
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// A [`Selector`] that remembers the variant records it was built from.
///
/// Dereferences to the inner [`Selector`] for every query.
#[derive(Debug, Clone)]
pub struct RecordSelector {
    selector: Selector,
    records: Vec<Value>,
    id_key: String,
}

impl RecordSelector {
    /// Index a record catalog and keep its variant records.
    pub fn new(records: RecordCatalog, config: &SelectorConfig) -> Result<Self, CatalogError> {
        let selector = Selector::from_source(&records, config)?;
        let id_key = records.keys().id_key.clone();
        Ok(Self {
            selector,
            records: records.into_variants(),
            id_key,
        })
    }

    /// Build from a `{"groups": [...], "variants": [...]}` document using the
    /// record keys of `config`.
    pub fn from_document(document: &Value, config: &SelectorConfig) -> Result<Self, CatalogError> {
        let records = RecordCatalog::from_document(document, config.record_keys.clone())?;
        Self::new(records, config)
    }

    pub fn toggle(&mut self, value: &OptionValue) -> Result<Toggle, SelectionError> {
        self.selector.toggle(value)
    }

    /// The full record of the resolved variant.
    ///
    /// The first record whose identity equals the resolved id.
    pub fn selected_record(&self) -> Option<&Value> {
        let id = self.selector.resolve_variant()?;
        self.records
            .iter()
            .find(|record| scalar_at(record, &self.id_key).as_ref() == Some(id))
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }
}

impl Deref for RecordSelector {
    type Target = Selector;

    fn deref(&self) -> &Selector {
        &self.selector
    }
}

impl DerefMut for RecordSelector {
    fn deref_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }
}
