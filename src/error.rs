// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for catalog construction and selection.
//!
//! Two families:
//! - [`CatalogError`]: the catalog cannot be indexed. Fatal at build time,
//!   no partially-built index is ever returned.
//! - [`SelectionError`]: one toggle was rejected. The selection is unchanged.

use crate::model::{OptionValue, VariantId};
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// Errors raised while building a catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, IntoStaticStr)]
pub enum CatalogError {
    /// A variant uses a value that no option group offers.
    #[error("variant {variant} uses option value {value:?} which belongs to no option group")]
    UnknownOptionValue { variant: VariantId, value: OptionValue },

    /// A record lacks the field the configured key names.
    #[error("{record} record #{index} has no {key:?} field")]
    MissingField {
        record: &'static str,
        index: usize,
        key: String,
    },

    /// A field that must hold a text or integer scalar holds something else.
    #[error("{record} record #{index} field {key:?} is not a text or integer scalar: {found}")]
    NotAScalar {
        record: &'static str,
        index: usize,
        key: String,
        found: String,
    },

    /// A field that must hold a list holds something else.
    #[error("{record} record #{index} field {key:?} is not a list")]
    NotAList {
        record: &'static str,
        index: usize,
        key: String,
    },
}

/// Errors raised by a single selection command.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, IntoStaticStr)]
pub enum SelectionError {
    /// The value belongs to no option group.
    #[error("option value {0:?} belongs to no option group")]
    UnknownValue(OptionValue),

    /// The group index is out of range.
    #[error("option group {group} does not exist ({count} groups)")]
    UnknownGroup { group: usize, count: usize },

    /// The value exists, but not in the addressed group.
    #[error("option value {value:?} is not offered by group {group}")]
    NotInGroup { group: usize, value: OptionValue },

    /// The selection was created by a catalog index with a different number
    /// of option groups.
    #[error("selection has {slots} slots but the catalog has {groups} option groups")]
    ForeignSelection { slots: usize, groups: usize },
}
