// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime assignment for option values.
//!
//! # Assignment Order
//!
//! Primes are handed out group-major, then in value order within a group:
//!
//! ```text
//! Color: Red=2  Blue=3
//! Size:  S=5    M=7
//! ```
//!
//! One prime is generated per (group, value) occurrence, duplicates included,
//! so assignment is a pure function of the group layout. Under
//! [`ValueKeying::SharedValue`] a repeated scalar overwrites its earlier
//! entry and some generated primes end up unused.

use crate::config::ValueKeying;
use crate::model::{first_primes, OptionGroup, OptionValue, PrimeCode};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PrimeKey {
    group: Option<usize>,
    value: OptionValue,
}

/// Mapping from option keys to primes.
#[derive(Debug, Clone)]
pub struct PrimeMap {
    keying: ValueKeying,
    primes: HashMap<PrimeKey, PrimeCode>,
    /// Groups offering each value, ascending, without repeats.
    owners: HashMap<OptionValue, Vec<usize>>,
    generated: usize,
}

impl PrimeMap {
    /// Get the prime of `value` as offered by `group`.
    ///
    /// Under shared keying the group is ignored.
    pub fn prime_of(&self, group: usize, value: &OptionValue) -> Option<PrimeCode> {
        let key = PrimeKey {
            group: self.group_part(group),
            value: value.clone(),
        };
        self.primes.get(&key).copied()
    }

    /// Groups offering `value`, in group order. Empty if no group does.
    pub fn groups_offering(&self, value: &OptionValue) -> &[usize] {
        self.owners.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keying(&self) -> ValueKeying {
        self.keying
    }

    /// Number of distinct keys in the map.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Number of primes generated, one per (group, value) occurrence.
    pub fn generated(&self) -> usize {
        self.generated
    }

    fn group_part(&self, group: usize) -> Option<usize> {
        match self.keying {
            ValueKeying::PerGroup => Some(group),
            ValueKeying::SharedValue => None,
        }
    }
}

/// Assigns primes to the values of a list of option groups.
pub struct PrimeAssigner;

impl PrimeAssigner {
    /// Assign the next ascending prime to every (group, value) occurrence.
    pub fn build(groups: &[OptionGroup], keying: ValueKeying) -> PrimeMap {
        let occurrences: usize = groups.iter().map(|group| group.values.len()).sum();

        let mut map = PrimeMap {
            keying,
            primes: HashMap::with_capacity(occurrences),
            owners: HashMap::new(),
            generated: occurrences,
        };

        let slots = groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| group.values.iter().map(move |value| (index, value)));

        for ((index, value), prime) in slots.zip(first_primes(occurrences)) {
            let key = PrimeKey {
                group: map.group_part(index),
                value: value.clone(),
            };
            map.primes.insert(key, prime);

            let owners = map.owners.entry(value.clone()).or_default();
            if owners.last() != Some(&index) {
                owners.push(index);
            }
        }

        map
    }
}
