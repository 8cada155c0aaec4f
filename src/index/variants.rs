// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Variant codes: each variant as the product of its values' primes.
//!
//! A variant containing values with primes p and q has a code divisible by
//! p·q. Checking whether any variant combines two values is therefore one
//! modulus per variant, with no cross-product search.

use crate::config::ValueKeying;
use crate::error::CatalogError;
use crate::index::PrimeMap;
use crate::model::{OptionGroup, Variant, VariantCode, VariantId};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// A variant's identity and code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    pub id: VariantId,
    pub code: VariantCode,
}

/// Every variant's code, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    entries: Vec<VariantEntry>,
}

impl VariantIndex {
    /// Encode every variant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownOptionValue`] for the first variant value
    /// offered by no group.
    pub fn build(
        variants: &[Variant],
        groups: &[OptionGroup],
        primes: &PrimeMap,
    ) -> Result<Self, CatalogError> {
        let entries = variants
            .iter()
            .map(|variant| {
                Ok(VariantEntry {
                    id: variant.id.clone(),
                    code: encode(variant, groups, primes)?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { entries })
    }

    /// Check whether some variant's code is divisible by `divisor`.
    pub fn any_divisible_by(&self, divisor: &VariantCode) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.code.is_divisible_by(divisor))
    }

    /// First variant whose code equals `code` exactly.
    pub fn find_exact(&self, code: &VariantCode) -> Option<&VariantEntry> {
        self.entries.iter().find(|entry| entry.code == *code)
    }

    pub fn entries(&self) -> &[VariantEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Multiply the primes of one variant's values.
///
/// Under per-group keying a scalar offered by several groups is attributed so
/// that the variant covers as many distinct groups as possible, whatever order
/// it lists its values in: ("M", "S") and ("S", "M") over Size{S, M} and
/// Finish{Matte, M} both put "S" on Size and "M" on Finish.
fn encode(
    variant: &Variant,
    groups: &[OptionGroup],
    primes: &PrimeMap,
) -> Result<VariantCode, CatalogError> {
    let offering = variant
        .values
        .iter()
        .map(|value| {
            let offered = primes.groups_offering(value);
            if offered.is_empty() {
                Err(CatalogError::UnknownOptionValue {
                    variant: variant.id.clone(),
                    value: value.clone(),
                })
            } else {
                Ok(offered)
            }
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    let attributed = match primes.keying() {
        ValueKeying::SharedValue => offering.iter().map(|offered| Some(offered[0])).collect(),
        ValueKeying::PerGroup => attribute(&offering),
    };

    let mut code = VariantCode::one();
    for ((value, group), offered) in variant.values.iter().zip(attributed).zip(&offering) {
        let group = match group {
            Some(group) => group,
            None => {
                warn!(
                    variant = %variant.id,
                    value = %value,
                    group = groups.get(offered[0]).map_or("?", |g| g.name.as_str()),
                    "variant repeats a value of one option group"
                );
                offered[0]
            }
        };
        let prime = primes
            .prime_of(group, value)
            .ok_or_else(|| CatalogError::UnknownOptionValue {
                variant: variant.id.clone(),
                value: value.clone(),
            })?;
        code.multiply(prime);
    }

    Ok(code)
}

/// Match each value to a distinct offering group.
///
/// A value takes its first free offering group; only when none is free does
/// it try to move an earlier value along to another of that value's groups.
/// A value left without a group of its own maps to `None`.
fn attribute(offering: &[&[usize]]) -> Vec<Option<usize>> {
    let mut owner: HashMap<usize, usize> = HashMap::new();

    for value in 0..offering.len() {
        augment(value, offering, &mut owner, &mut HashSet::new());
    }

    let mut attributed = vec![None; offering.len()];
    for (group, value) in owner {
        attributed[value] = Some(group);
    }
    attributed
}

fn augment(
    value: usize,
    offering: &[&[usize]],
    owner: &mut HashMap<usize, usize>,
    visited: &mut HashSet<usize>,
) -> bool {
    if let Some(&group) = offering[value]
        .iter()
        .find(|&&g| !owner.contains_key(&g) && !visited.contains(&g))
    {
        owner.insert(group, value);
        return true;
    }

    for &group in offering[value] {
        if !visited.insert(group) {
            continue;
        }
        let Some(holder) = owner.get(&group).copied() else {
            continue;
        };
        if augment(holder, offering, owner, visited) {
            owner.insert(group, value);
            return true;
        }
    }
    false
}
