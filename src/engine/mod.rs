// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection queries against a catalog index.
//!
//! - [`CompatibilityChecker`]: is a value selected, is it disabled
//! - [`VariantResolver`]: which variant does a selection identify
//! - [`CompatibilityPredicate`]: the swappable reachability test behind
//!   every disabled check
//!
//! Both query types borrow the immutable [`CatalogIndex`](crate::index::CatalogIndex)
//! and take the [`SelectionState`](crate::state::SelectionState) per call.

pub mod compatibility;
pub mod predicate;
pub mod resolver;

pub use compatibility::{CompatibilityChecker, GroupStatus, ValueStatus};
pub use predicate::{CompatibilityMode, CompatibilityPredicate, JointPredicate, PairwisePredicate};
pub use resolver::VariantResolver;
