// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog sources: where option groups and variants come from.
//!
//! The index never reads storage itself. A [`CatalogSource`] hands it ordered
//! groups and variants plus the accessors that pull scalars out of them, and
//! [`extract`] normalizes any source into a typed [`Catalog`].
//!
//! Two sources ship with the crate:
//! - [`Catalog`] itself, for already-extracted scalars
//! - [`RecordCatalog`], for field-keyed JSON records

pub mod records;

pub use records::{RecordCatalog, ValuesFn};

use crate::error::CatalogError;
use crate::model::{Catalog, OptionGroup, OptionValue, Variant, VariantId};

/// Supplier of ordered option groups and ordered variants.
///
/// Accessors receive the position of the item so errors can point at it.
pub trait CatalogSource {
    type Group;
    type Variant;

    /// Option groups, in slot order.
    fn groups(&self) -> &[Self::Group];

    /// Variants, in tie-break order.
    fn variants(&self) -> &[Self::Variant];

    /// Display name of a group.
    fn group_name(&self, index: usize, _group: &Self::Group) -> Result<String, CatalogError> {
        Ok(format!("group {}", index))
    }

    /// Values offered by a group, in order.
    fn values_of_group(
        &self,
        index: usize,
        group: &Self::Group,
    ) -> Result<Vec<OptionValue>, CatalogError>;

    /// Values that define a variant, in order.
    fn values_of_variant(
        &self,
        index: usize,
        variant: &Self::Variant,
    ) -> Result<Vec<OptionValue>, CatalogError>;

    /// External identity of a variant.
    fn id_of(&self, index: usize, variant: &Self::Variant) -> Result<VariantId, CatalogError>;
}

impl CatalogSource for Catalog {
    type Group = OptionGroup;
    type Variant = Variant;

    fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    fn variants(&self) -> &[Variant] {
        &self.variants
    }

    fn group_name(&self, _index: usize, group: &OptionGroup) -> Result<String, CatalogError> {
        Ok(group.name.clone())
    }

    fn values_of_group(
        &self,
        _index: usize,
        group: &OptionGroup,
    ) -> Result<Vec<OptionValue>, CatalogError> {
        Ok(group.values.clone())
    }

    fn values_of_variant(
        &self,
        _index: usize,
        variant: &Variant,
    ) -> Result<Vec<OptionValue>, CatalogError> {
        Ok(variant.values.clone())
    }

    fn id_of(&self, _index: usize, variant: &Variant) -> Result<VariantId, CatalogError> {
        Ok(variant.id.clone())
    }
}

/// Read every group and variant out of a source.
///
/// Stops at the first accessor error.
pub fn extract<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog, CatalogError> {
    let groups = source
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| {
            Ok(OptionGroup {
                name: source.group_name(index, group)?,
                values: source.values_of_group(index, group)?,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    let variants = source
        .variants()
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            Ok(Variant {
                id: source.id_of(index, variant)?,
                values: source.values_of_variant(index, variant)?,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(Catalog { groups, variants })
}
