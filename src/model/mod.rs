// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Value types for the prime encoding.
//!
//! This module contains type-safe representations of the encoding primitives:
//! - Scalar: Option values and variant identities (text or integer)
//! - Catalog: Option groups and variants as plain data
//! - PrimeCode: The prime assigned to one option key
//! - VariantCode: Product of primes, arbitrary precision

pub mod catalog;
pub mod code;
pub mod prime;
pub mod scalar;

// Re-export for convenience
pub use catalog::{Catalog, OptionGroup, Variant};
pub use code::VariantCode;
pub use prime::{first_primes, PrimeCode};
pub use scalar::{OptionValue, Scalar, VariantId};
