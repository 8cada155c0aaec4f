// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use sku_select::{Catalog, OptionValue, Variant};

pub fn v(text: &str) -> OptionValue {
    OptionValue::from(text)
}

/// Color {Red, Blue} × Size {S, M}, with Blue/M missing.
pub fn shirt_catalog() -> Catalog {
    Catalog::new()
        .group("Color", ["Red", "Blue"])
        .group("Size", ["S", "M"])
        .variant("V1", ["Red", "S"])
        .variant("V2", ["Red", "M"])
        .variant("V3", ["Blue", "S"])
}

/// Name of value `value` of group `group` in a generated catalog.
pub fn value_name(group: usize, value: usize) -> OptionValue {
    OptionValue::from(format!("g{}v{}", group, value))
}

/// A generated catalog plus, per variant, the chosen value index per group.
#[derive(Debug, Clone)]
pub struct Generated {
    pub sizes: Vec<usize>,
    pub picks: Vec<Vec<usize>>,
    pub catalog: Catalog,
}

impl Generated {
    fn new(sizes: Vec<usize>, picks: Vec<Vec<usize>>) -> Self {
        let mut catalog = Catalog::new();
        for (group, &size) in sizes.iter().enumerate() {
            catalog = catalog.group(
                format!("G{}", group),
                (0..size).map(|value| value_name(group, value)),
            );
        }
        catalog.variants = picks
            .iter()
            .enumerate()
            .map(|(index, pick)| {
                Variant::new(
                    format!("V{}", index),
                    pick.iter()
                        .enumerate()
                        .map(|(group, &value)| value_name(group, value)),
                )
            })
            .collect();
        Self {
            sizes,
            picks,
            catalog,
        }
    }

    /// Every (group, value) of the catalog.
    pub fn all_values(&self) -> Vec<(usize, OptionValue)> {
        self.sizes
            .iter()
            .enumerate()
            .flat_map(|(group, &size)| {
                (0..size).map(move |value| (group, value_name(group, value)))
            })
            .collect()
    }
}

/// Catalogs of 1..=4 groups with 1..=3 values each and up to 8 fully
/// covering variants (duplicates allowed).
pub fn generated_catalog() -> impl Strategy<Value = Generated> {
    prop::collection::vec(1usize..4, 1..5)
        .prop_flat_map(|sizes| {
            let pick: Vec<_> = sizes.iter().map(|&size| 0..size).collect();
            (Just(sizes), prop::collection::vec(pick, 0..9))
        })
        .prop_map(|(sizes, picks)| Generated::new(sizes, picks))
}
