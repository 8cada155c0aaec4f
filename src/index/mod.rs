// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog index: immutable data computed once per catalog.
//!
//! The index combines:
//! - PrimeMap: the prime of every option key
//! - VariantIndex: the code of every variant
//! - GroupIndex: the primes of every group
//!
//! Nothing here changes after [`CatalogIndex::build`]. Selections live in a
//! separate [`SelectionState`] passed into each query, so one index (behind
//! an `Arc`) serves any number of independent selections.
//!
//! # Example
//!
//! ```
//! use sku_select::index::CatalogIndex;
//! use sku_select::model::{Catalog, OptionValue, VariantId};
//!
//! let catalog = Catalog::new()
//!     .group("Color", ["Red", "Blue"])
//!     .group("Size", ["S", "M"])
//!     .variant("V1", ["Red", "S"])
//!     .variant("V2", ["Red", "M"])
//!     .variant("V3", ["Blue", "S"]);
//! let index = CatalogIndex::new(catalog).unwrap();
//!
//! let mut state = index.new_selection();
//! index.toggle(&mut state, &OptionValue::from("Blue")).unwrap();
//! assert!(index.is_disabled(&state, &OptionValue::from("M")));
//! assert!(!index.is_disabled(&state, &OptionValue::from("Red")));
//!
//! index.toggle(&mut state, &OptionValue::from("S")).unwrap();
//! assert_eq!(index.resolve_variant(&state), Some(&VariantId::from("V3")));
//! ```

pub mod groups;
pub mod primes;
pub mod variants;

pub use groups::GroupIndex;
pub use primes::{PrimeAssigner, PrimeMap};
pub use variants::{VariantEntry, VariantIndex};

use crate::config::SelectorConfig;
use crate::engine::{CompatibilityChecker, CompatibilityMode, GroupStatus, VariantResolver};
use crate::error::{CatalogError, SelectionError};
use crate::model::{Catalog, OptionGroup, OptionValue, PrimeCode, VariantCode, VariantId};
use crate::source::{self, CatalogSource};
use crate::state::{SelectionState, Toggle};
use tracing::{debug, trace};

/// Immutable prime encoding of a catalog.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    groups: Vec<OptionGroup>,
    primes: PrimeMap,
    variants: VariantIndex,
    group_index: GroupIndex,
    compatibility: CompatibilityMode,
}

impl CatalogIndex {
    /// Index a typed catalog with the default configuration.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        Self::build(catalog, &SelectorConfig::default())
    }

    /// Index a typed catalog.
    ///
    /// # Errors
    ///
    /// Fails if a variant uses a value that no group offers. No partial index
    /// is returned.
    pub fn build(catalog: Catalog, config: &SelectorConfig) -> Result<Self, CatalogError> {
        let Catalog { groups, variants } = catalog;

        let primes = PrimeAssigner::build(&groups, config.keying);
        let variant_index = VariantIndex::build(&variants, &groups, &primes)?;
        let group_index = GroupIndex::build(&groups, &primes);

        debug!(
            groups = groups.len(),
            variants = variant_index.len(),
            primes = primes.generated(),
            keys = primes.len(),
            keying = %config.keying,
            compatibility = %config.compatibility,
            "built catalog index"
        );

        Ok(Self {
            groups,
            primes,
            variants: variant_index,
            group_index,
            compatibility: config.compatibility,
        })
    }

    /// Read a catalog out of any source and index it.
    pub fn from_source<S>(source: &S, config: &SelectorConfig) -> Result<Self, CatalogError>
    where
        S: CatalogSource + ?Sized,
    {
        Self::build(source::extract(source)?, config)
    }

    /// Create an empty selection with one slot per group.
    pub fn new_selection(&self) -> SelectionState {
        SelectionState::new(self.groups.len())
    }

    /// Index of the first group offering `value`.
    pub fn group_index_of(&self, value: &OptionValue) -> Option<usize> {
        self.group_index.group_index_of(&self.primes, value)
    }

    /// Prime of `value` as offered by `group`.
    pub fn prime_of(&self, group: usize, value: &OptionValue) -> Option<PrimeCode> {
        self.primes
            .prime_of(group, value)
            .filter(|&prime| self.group_index.contains(group, prime))
    }

    pub fn checker(&self) -> CompatibilityChecker<'_> {
        CompatibilityChecker::new(self)
    }

    pub fn resolver(&self) -> VariantResolver<'_> {
        VariantResolver::new(self)
    }

    /// Check whether `value` occupies its group's slot.
    pub fn is_selected(&self, state: &SelectionState, value: &OptionValue) -> bool {
        self.checker().is_selected(state, value)
    }

    /// Check whether `value` can no longer lead to any variant.
    pub fn is_disabled(&self, state: &SelectionState, value: &OptionValue) -> bool {
        self.checker().is_disabled(state, value)
    }

    /// Like [`is_disabled`](Self::is_disabled), for `value` as offered by `group`.
    pub fn is_disabled_in_group(
        &self,
        state: &SelectionState,
        group: usize,
        value: &OptionValue,
    ) -> bool {
        self.checker().is_disabled_in_group(state, group, value)
    }

    /// Selected / disabled flags for every value of every group.
    pub fn statuses(&self, state: &SelectionState) -> Vec<GroupStatus> {
        self.checker().statuses(state)
    }

    /// Select `value` in its group, or deselect it if already selected.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownValue`] if no group offers `value`, and
    /// [`SelectionError::ForeignSelection`] if `state` was not created by this
    /// index. The state is left untouched.
    pub fn toggle(
        &self,
        state: &mut SelectionState,
        value: &OptionValue,
    ) -> Result<Toggle, SelectionError> {
        self.check_selection(state)?;
        let group = self
            .group_index_of(value)
            .ok_or_else(|| SelectionError::UnknownValue(value.clone()))?;
        Ok(self.apply(state, group, value))
    }

    /// Like [`toggle`](Self::toggle), addressing the group explicitly.
    ///
    /// Needed when one scalar is offered by several groups and the caller
    /// means a group other than the first.
    pub fn toggle_in_group(
        &self,
        state: &mut SelectionState,
        group: usize,
        value: &OptionValue,
    ) -> Result<Toggle, SelectionError> {
        self.check_selection(state)?;
        if group >= self.groups.len() {
            return Err(SelectionError::UnknownGroup {
                group,
                count: self.groups.len(),
            });
        }
        if self.prime_of(group, value).is_none() {
            return Err(match self.group_index_of(value) {
                Some(_) => SelectionError::NotInGroup {
                    group,
                    value: value.clone(),
                },
                None => SelectionError::UnknownValue(value.clone()),
            });
        }
        Ok(self.apply(state, group, value))
    }

    fn check_selection(&self, state: &SelectionState) -> Result<(), SelectionError> {
        if state.len() == self.groups.len() {
            Ok(())
        } else {
            Err(SelectionError::ForeignSelection {
                slots: state.len(),
                groups: self.groups.len(),
            })
        }
    }

    fn apply(&self, state: &mut SelectionState, group: usize, value: &OptionValue) -> Toggle {
        let toggle = state.apply(group, value);
        trace!(group, value = %value, ?toggle, "toggled option value");
        toggle
    }

    /// Product of the primes of every selected value (1 when empty).
    pub fn selected_code(&self, state: &SelectionState) -> VariantCode {
        self.resolver().selected_code(state)
    }

    /// First variant whose code equals the selection's code.
    pub fn resolve_variant(&self, state: &SelectionState) -> Option<&VariantId> {
        self.resolver().resolve(state)
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn primes(&self) -> &PrimeMap {
        &self.primes
    }

    pub fn variants(&self) -> &VariantIndex {
        &self.variants
    }

    pub fn group_index(&self) -> &GroupIndex {
        &self.group_index
    }

    pub fn compatibility(&self) -> CompatibilityMode {
        self.compatibility
    }
}
