// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Option compatibility and variant resolution for product catalogs.
//!
//! Given option groups (Color, Size, ...) and the variants a catalog actually
//! stocks, this crate answers the two questions a product page asks on every
//! click:
//!
//! 1. Which option values can still lead to some variant, and which must be
//!    disabled?
//! 2. Once every group is chosen, which variant is it?
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Catalog index (Immutable)
//!
//! Computed once per catalog:
//! - A distinct prime per option value (group-major order)
//! - Each variant's code: the product of its values' primes
//! - Each group's list of primes
//!
//! ## Tier 2: Selection (Mutable)
//!
//! One slot per group, changed only by toggles. Each user owns one; all of
//! them read the same index.
//!
//! # Prime Encoding
//!
//! A variant contains values `a` and `b` exactly when its code is divisible by
//! `prime(a) · prime(b)`. "Is Blue still possible with size M?" is then one
//! modulus per variant, never a search over combinations. Codes are arbitrary
//! precision, so catalog size never overflows them.
//!
//! # Example
//!
//! ```
//! use sku_select::{Catalog, OptionValue, Selector, VariantId};
//!
//! let catalog = Catalog::new()
//!     .group("Color", ["Red", "Blue"])
//!     .group("Size", ["S", "M"])
//!     .variant("V1", ["Red", "S"])
//!     .variant("V2", ["Red", "M"])
//!     .variant("V3", ["Blue", "S"]);
//! let mut selector = Selector::new(catalog)?;
//!
//! selector.toggle(&OptionValue::from("Blue"))?;
//! assert!(selector.is_disabled(&OptionValue::from("M")));
//! assert!(!selector.is_disabled(&OptionValue::from("S")));
//! assert!(!selector.is_disabled(&OptionValue::from("Red")));
//!
//! selector.toggle(&OptionValue::from("S"))?;
//! assert_eq!(selector.resolve_variant(), Some(&VariantId::from("V3")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod index;
pub mod model;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use config::{RecordKeys, SelectorConfig, ValueKeying};
pub use context::{RecordSelector, Selector};
pub use engine::{CompatibilityMode, GroupStatus, ValueStatus};
pub use error::{CatalogError, SelectionError};
pub use index::CatalogIndex;
pub use model::{Catalog, OptionGroup, OptionValue, Variant, VariantId};
pub use source::{CatalogSource, RecordCatalog};
pub use state::{SelectionState, Toggle};
