// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-group prime lists, for reverse lookup of a value's group.

use crate::index::PrimeMap;
use crate::model::{OptionGroup, OptionValue, PrimeCode};

/// The primes of each group's values, in group order then value order.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    groups: Vec<Vec<PrimeCode>>,
}

impl GroupIndex {
    pub fn build(groups: &[OptionGroup], primes: &PrimeMap) -> Self {
        let groups = groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                group
                    .values
                    .iter()
                    .filter_map(|value| primes.prime_of(index, value))
                    .collect()
            })
            .collect();
        Self { groups }
    }

    /// Index of the first group whose primes include the prime of `value`.
    ///
    /// Returns None if no group offers the value.
    pub fn group_index_of(&self, primes: &PrimeMap, value: &OptionValue) -> Option<usize> {
        self.groups
            .iter()
            .enumerate()
            .position(|(index, group)| match primes.prime_of(index, value) {
                Some(prime) => group.contains(&prime),
                None => false,
            })
    }

    /// Check whether `prime` belongs to group `index`.
    pub fn contains(&self, index: usize, prime: PrimeCode) -> bool {
        self.groups
            .get(index)
            .is_some_and(|group| group.contains(&prime))
    }

    /// Primes of one group, or an empty slice if out of range.
    pub fn primes_of(&self, index: usize) -> &[PrimeCode] {
        self.groups.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
