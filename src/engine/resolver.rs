// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resolution of a selection to one variant.

use crate::index::{CatalogIndex, VariantEntry};
use crate::model::{VariantCode, VariantId};
use crate::state::SelectionState;

/// Maps a selection onto the variant it identifies.
#[derive(Debug, Clone, Copy)]
pub struct VariantResolver<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> VariantResolver<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// Product of the primes of every selected value. The empty selection is 1.
    pub fn selected_code(&self, state: &SelectionState) -> VariantCode {
        state
            .selected()
            .filter_map(|(group, value)| self.catalog.prime_of(group, value))
            .collect()
    }

    /// First variant, in catalog order, whose code equals the selection's.
    ///
    /// A partial selection's code is a proper factor of the variants it could
    /// still become, so this is None until the selection is exact. There is
    /// no best-effort match.
    pub fn resolve_entry(&self, state: &SelectionState) -> Option<&'a VariantEntry> {
        self.catalog.variants().find_exact(&self.selected_code(state))
    }

    pub fn resolve(&self, state: &SelectionState) -> Option<&'a VariantId> {
        self.resolve_entry(state).map(|entry| &entry.id)
    }
}
