// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! VariantCode type: a product of primes.
//!
//! Codes grow with the number of groups, so they are held as arbitrary
//! precision integers. A catalog with ten groups of twenty values already
//! needs primes past 500, whose ten-fold product does not fit in a u64.
//!
//! # Examples
//!
//! ```
//! use sku_select::model::{PrimeCode, VariantCode};
//!
//! let red = PrimeCode::new(2);
//! let small = PrimeCode::new(5);
//! let code = VariantCode::from_primes([red, small]);
//!
//! assert!(code.is_divisible_by(&VariantCode::from_primes([red])));
//! assert!(!code.is_divisible_by(&VariantCode::from_primes([PrimeCode::new(3)])));
//! assert_eq!(code.to_string(), "10");
//! ```

use crate::model::PrimeCode;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product of the primes of a set of option values.
///
/// The empty product is 1, so every code is divisible by the empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantCode(BigUint);

impl VariantCode {
    /// The multiplicative identity (code of the empty selection).
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Multiply together a sequence of primes.
    pub fn from_primes<I>(primes: I) -> Self
    where
        I: IntoIterator<Item = PrimeCode>,
    {
        let mut code = Self::one();
        for prime in primes {
            code.multiply(prime);
        }
        code
    }

    /// Multiply this code by one more prime.
    pub fn multiply(&mut self, prime: PrimeCode) {
        self.0 *= prime.value();
    }

    /// Return this code multiplied by `prime`, leaving `self` untouched.
    pub fn with(&self, prime: PrimeCode) -> Self {
        let mut code = self.clone();
        code.multiply(prime);
        code
    }

    /// Check whether `divisor` divides this code exactly.
    pub fn is_divisible_by(&self, divisor: &VariantCode) -> bool {
        (&self.0 % &divisor.0).is_zero()
    }

    /// Check whether this is the empty product.
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Get the underlying integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl Default for VariantCode {
    fn default() -> Self {
        Self::one()
    }
}

impl fmt::Display for VariantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromIterator<PrimeCode> for VariantCode {
    fn from_iter<I: IntoIterator<Item = PrimeCode>>(iter: I) -> Self {
        Self::from_primes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::first_primes;

    #[test]
    fn test_one() {
        let code = VariantCode::one();
        assert!(code.is_one());
        assert_eq!(code, VariantCode::default());
        assert_eq!(code, VariantCode::from_primes([]));
    }

    #[test]
    fn test_everything_divisible_by_one() {
        let code = VariantCode::from_primes([PrimeCode::new(7), PrimeCode::new(11)]);
        assert!(code.is_divisible_by(&VariantCode::one()));
        assert!(!VariantCode::one().is_divisible_by(&code));
    }

    #[test]
    fn test_with_leaves_original() {
        let base = VariantCode::from_primes([PrimeCode::new(3)]);
        let extended = base.with(PrimeCode::new(5));
        assert_eq!(base.to_string(), "3");
        assert_eq!(extended.to_string(), "15");
        assert!(extended.is_divisible_by(&base));
    }

    #[test]
    fn test_products_beyond_u64() {
        // The product of the first 20 primes is roughly 5.6e26.
        let primes = first_primes(20);
        let code: VariantCode = primes.iter().copied().collect();
        assert!(code.as_biguint().bits() > 64);

        for &prime in &primes {
            assert!(code.is_divisible_by(&VariantCode::from_primes([prime])));
        }
        assert!(!code.is_divisible_by(&VariantCode::from_primes([PrimeCode::new(73)])));
    }
}
