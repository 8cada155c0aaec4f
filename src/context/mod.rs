// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selector: a catalog index paired with one user's selection.
//!
//! The Selector combines:
//! - Immutable: the shared [`CatalogIndex`] (behind an `Arc`)
//! - Mutable: an owned [`SelectionState`] and its [`Statistics`]
//!
//! Multiple Selectors built with [`Selector::with_catalog`] read the same
//! index while each keeps its own selection.
//!
//! # Example
//!
//! ```
//! use sku_select::context::Selector;
//! use sku_select::model::{Catalog, OptionValue, VariantId};
//!
//! let catalog = Catalog::new()
//!     .group("Color", ["Red", "Blue"])
//!     .group("Size", ["S", "M"])
//!     .variant("V1", ["Red", "S"])
//!     .variant("V2", ["Red", "M"])
//!     .variant("V3", ["Blue", "S"]);
//! let mut selector = Selector::new(catalog).unwrap();
//!
//! selector.toggle(&OptionValue::from("Blue")).unwrap();
//! assert!(selector.is_disabled(&OptionValue::from("M")));
//!
//! selector.toggle(&OptionValue::from("S")).unwrap();
//! assert_eq!(selector.resolve_variant(), Some(&VariantId::from("V3")));
//! ```

pub mod records;

pub use records::RecordSelector;

use crate::config::SelectorConfig;
use crate::engine::GroupStatus;
use crate::error::{CatalogError, SelectionError};
use crate::index::CatalogIndex;
use crate::model::{Catalog, OptionValue, VariantCode, VariantId};
use crate::source::CatalogSource;
use crate::state::{Counters, SelectionState, Statistics, Toggle};
use std::sync::Arc;
use tracing::warn;

/// One selection over a shared catalog index.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Arc<CatalogIndex>,
    state: SelectionState,
    pub statistics: Statistics,
}

impl Selector {
    /// Index a typed catalog with the default configuration.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(Arc::new(CatalogIndex::new(catalog)?)))
    }

    /// Index any catalog source.
    pub fn from_source<S>(source: &S, config: &SelectorConfig) -> Result<Self, CatalogError>
    where
        S: CatalogSource + ?Sized,
    {
        Ok(Self::with_catalog(Arc::new(CatalogIndex::from_source(
            source, config,
        )?)))
    }

    /// Create a selector over an existing index.
    ///
    /// This is how several selections share one index.
    pub fn with_catalog(catalog: Arc<CatalogIndex>) -> Self {
        let state = catalog.new_selection();
        Self {
            catalog,
            state,
            statistics: Statistics::new(),
        }
    }

    pub fn is_selected(&self, value: &OptionValue) -> bool {
        self.catalog.is_selected(&self.state, value)
    }

    pub fn is_disabled(&self, value: &OptionValue) -> bool {
        self.catalog.is_disabled(&self.state, value)
    }

    pub fn is_disabled_in_group(&self, group: usize, value: &OptionValue) -> bool {
        self.catalog.is_disabled_in_group(&self.state, group, value)
    }

    /// Select `value` in its group, or deselect it if already selected.
    ///
    /// A rejected toggle leaves the selection unchanged.
    pub fn toggle(&mut self, value: &OptionValue) -> Result<Toggle, SelectionError> {
        let result = self.catalog.toggle(&mut self.state, value);
        self.record(result)
    }

    /// Like [`toggle`](Self::toggle), addressing the group explicitly.
    pub fn toggle_in_group(
        &mut self,
        group: usize,
        value: &OptionValue,
    ) -> Result<Toggle, SelectionError> {
        let result = self.catalog.toggle_in_group(&mut self.state, group, value);
        self.record(result)
    }

    fn record(
        &mut self,
        result: Result<Toggle, SelectionError>,
    ) -> Result<Toggle, SelectionError> {
        match &result {
            Ok(toggle) => {
                self.statistics.record_toggle(toggle);
                if self.catalog.resolve_variant(&self.state).is_some() {
                    self.statistics.increment_counter(Counters::Resolutions);
                }
            }
            Err(err) => {
                warn!(error = %err, "rejected toggle");
                self.statistics.increment_counter(Counters::RejectedToggles);
            }
        }
        result
    }

    pub fn selected_code(&self) -> VariantCode {
        self.catalog.selected_code(&self.state)
    }

    /// The variant the selection identifies exactly, if any.
    pub fn resolve_variant(&self) -> Option<&VariantId> {
        self.catalog.resolve_variant(&self.state)
    }

    pub fn statuses(&self) -> Vec<GroupStatus> {
        self.catalog.statuses(&self.state)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &Arc<CatalogIndex> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> OptionValue {
        OptionValue::from(text)
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .group("Color", ["Red", "Blue"])
            .group("Size", ["S", "M"])
            .variant("V1", ["Red", "S"])
            .variant("V2", ["Red", "M"])
            .variant("V3", ["Blue", "S"])
    }

    #[test]
    fn test_selector_new() {
        let selector = Selector::new(catalog()).unwrap();
        assert!(selector.selection().is_empty());
        assert_eq!(selector.selection().len(), 2);
        assert!(selector.selected_code().is_one());
    }

    #[test]
    fn test_independent_selectors() {
        let index = Arc::new(CatalogIndex::new(catalog()).unwrap());
        let mut first = Selector::with_catalog(Arc::clone(&index));
        let second = Selector::with_catalog(Arc::clone(&index));

        first.toggle(&v("Blue")).unwrap();

        assert!(first.is_selected(&v("Blue")));
        assert!(first.is_disabled(&v("M")));
        assert!(!second.is_selected(&v("Blue")));
        assert!(!second.is_disabled(&v("M")));
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn test_statistics() {
        let mut selector = Selector::new(catalog()).unwrap();
        selector.toggle(&v("Red")).unwrap();
        selector.toggle(&v("Blue")).unwrap();
        selector.toggle(&v("S")).unwrap();
        selector.toggle(&v("S")).unwrap();
        assert!(selector.toggle(&v("XL")).is_err());

        let stats = &selector.statistics;
        assert_eq!(stats.get(Counters::Selections), 2);
        assert_eq!(stats.get(Counters::Replacements), 1);
        assert_eq!(stats.get(Counters::Deselections), 1);
        assert_eq!(stats.get(Counters::RejectedToggles), 1);
        assert_eq!(stats.get(Counters::Resolutions), 1);
    }

    #[test]
    fn test_clear() {
        let mut selector = Selector::new(catalog()).unwrap();
        selector.toggle(&v("Red")).unwrap();
        selector.toggle(&v("M")).unwrap();
        assert_eq!(selector.resolve_variant(), Some(&VariantId::from("V2")));

        selector.clear();
        assert!(selector.selection().is_empty());
        assert_eq!(selector.resolve_variant(), None);
    }

    #[test]
    fn test_from_source_propagates_configuration_error() {
        let broken = catalog().variant("V4", ["Blue", "XL"]);
        let err = Selector::from_source(&broken, &SelectorConfig::default()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownOptionValue {
                variant: VariantId::from("V4"),
                value: v("XL")
            }
        );
    }
}
