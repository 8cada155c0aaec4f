// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-value enabled / disabled decisions.
//!
//! A value is disabled when the current selection in the *other* groups rules
//! out every variant containing it. Its own group never constrains it: the
//! user can always switch within a group.

use crate::engine::CompatibilityPredicate;
use crate::index::CatalogIndex;
use crate::model::{OptionValue, PrimeCode};
use crate::state::SelectionState;
use serde::Serialize;

/// Display flags of one option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueStatus {
    pub value: OptionValue,
    pub selected: bool,
    pub disabled: bool,
}

/// Display flags of every value of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStatus {
    pub index: usize,
    pub name: String,
    pub values: Vec<ValueStatus>,
}

/// Answers selected / disabled queries against a catalog index.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityChecker<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> CompatibilityChecker<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// Check whether `value` occupies its group's slot.
    pub fn is_selected(&self, state: &SelectionState, value: &OptionValue) -> bool {
        match self.catalog.group_index_of(value) {
            Some(group) => state.slot(group) == Some(value),
            None => false,
        }
    }

    /// Check whether `value` is unreachable from the current selection.
    ///
    /// A value offered by no group is always disabled.
    pub fn is_disabled(&self, state: &SelectionState, value: &OptionValue) -> bool {
        match self.catalog.group_index_of(value) {
            Some(group) => self.is_disabled_in_group(state, group, value),
            None => true,
        }
    }

    /// Like [`is_disabled`](Self::is_disabled), for `value` as offered by `group`.
    pub fn is_disabled_in_group(
        &self,
        state: &SelectionState,
        group: usize,
        value: &OptionValue,
    ) -> bool {
        match self.catalog.prime_of(group, value) {
            Some(candidate) => !self.is_compatible(state, group, candidate),
            None => true,
        }
    }

    /// The single compatibility test every query goes through.
    ///
    /// Collects the primes selected outside `group` and hands them to the
    /// index's configured predicate.
    fn is_compatible(&self, state: &SelectionState, group: usize, candidate: PrimeCode) -> bool {
        let others: Vec<PrimeCode> = state
            .selected()
            .filter(|&(other, _)| other != group)
            .filter_map(|(other, selected)| self.catalog.prime_of(other, selected))
            .collect();

        self.catalog
            .compatibility()
            .predicate()
            .admits(self.catalog.variants(), candidate, &others)
    }

    /// Flags for every value of every group, in catalog order.
    pub fn statuses(&self, state: &SelectionState) -> Vec<GroupStatus> {
        self.catalog
            .groups()
            .iter()
            .enumerate()
            .map(|(index, group)| GroupStatus {
                index,
                name: group.name.clone(),
                values: group
                    .values
                    .iter()
                    .map(|value| ValueStatus {
                        value: value.clone(),
                        selected: state.slot(index) == Some(value),
                        disabled: self.is_disabled_in_group(state, index, value),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::engine::CompatibilityMode;
    use crate::model::Catalog;

    fn v(text: &str) -> OptionValue {
        OptionValue::from(text)
    }

    fn three_groups(mode: CompatibilityMode) -> CatalogIndex {
        let catalog = Catalog::new()
            .group("Color", ["Red", "Blue"])
            .group("Size", ["S", "M"])
            .group("Finish", ["Gloss", "Matte"])
            .variant("A", ["Red", "S", "Matte"])
            .variant("B", ["Red", "M", "Gloss"])
            .variant("C", ["Blue", "S", "Gloss"]);
        let config = SelectorConfig::default().with_compatibility(mode);
        CatalogIndex::build(catalog, &config).unwrap()
    }

    #[test]
    fn test_nothing_disabled_initially() {
        let index = three_groups(CompatibilityMode::Pairwise);
        let state = index.new_selection();
        let checker = index.checker();
        for group in index.groups() {
            for value in &group.values {
                assert!(!checker.is_disabled(&state, value), "{} disabled", value);
                assert!(!checker.is_selected(&state, value));
            }
        }
    }

    #[test]
    fn test_own_group_exempt() {
        let index = three_groups(CompatibilityMode::Pairwise);
        let mut state = index.new_selection();
        index.toggle(&mut state, &v("Blue")).unwrap();

        let checker = index.checker();
        assert!(checker.is_selected(&state, &v("Blue")));
        assert!(!checker.is_disabled(&state, &v("Red")));
        assert!(checker.is_disabled(&state, &v("M")));
        assert!(checker.is_disabled(&state, &v("Matte")));
    }

    #[test]
    fn test_unknown_value_disabled() {
        let index = three_groups(CompatibilityMode::Pairwise);
        let state = index.new_selection();
        assert!(index.checker().is_disabled(&state, &v("Green")));
        assert!(!index.checker().is_selected(&state, &v("Green")));
    }

    #[test]
    fn test_pairwise_versus_joint() {
        for (mode, expected) in [
            (CompatibilityMode::Pairwise, false),
            (CompatibilityMode::Joint, true),
        ] {
            let index = three_groups(mode);
            let mut state = index.new_selection();
            index.toggle(&mut state, &v("S")).unwrap();
            index.toggle(&mut state, &v("Gloss")).unwrap();
            // Red+S (A) and Red+Gloss (B) exist; Red+S+Gloss does not.
            assert_eq!(index.is_disabled(&state, &v("Red")), expected, "{}", mode);
            // Blue+S+Gloss is C.
            assert!(!index.is_disabled(&state, &v("Blue")));
        }
    }

    #[test]
    fn test_statuses() {
        let index = three_groups(CompatibilityMode::Pairwise);
        let mut state = index.new_selection();
        index.toggle(&mut state, &v("Blue")).unwrap();

        let statuses = index.checker().statuses(&state);
        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].name, "Color");
        assert_eq!(
            statuses[0].values[1],
            ValueStatus {
                value: v("Blue"),
                selected: true,
                disabled: false
            }
        );
        let size: Vec<bool> = statuses[1].values.iter().map(|s| s.disabled).collect();
        assert_eq!(size, vec![false, true]);
    }

    #[test]
    fn test_statuses_per_group_for_repeated_scalar() {
        let catalog = Catalog::new()
            .group("Size", ["S", "M"])
            .group("Finish", ["Matte", "M"])
            .variant("V1", ["S", "M"]);
        let index = CatalogIndex::new(catalog).unwrap();
        let mut state = index.new_selection();
        index.toggle(&mut state, &v("S")).unwrap();

        let statuses = index.statuses(&state);
        // Finish "M" goes with S in V1; Finish "Matte" goes with nothing.
        assert!(!statuses[1].values[1].disabled);
        assert!(statuses[1].values[0].disabled);
    }
}
