// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PrimeCode type and the ascending prime sequence.
//!
//! Every option key receives its own prime. Because primes have no common
//! factors, "does this variant contain both values" becomes "is the variant
//! code divisible by the product of their primes".

use std::fmt;

/// A prime assigned to one option key.
///
/// This is a newtype wrapper to keep primes apart from indices and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimeCode(u64);

impl PrimeCode {
    /// Wrap a raw value, panicking if it is not prime.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not prime.
    pub fn new(value: u64) -> Self {
        assert!(is_prime(value), "Not a prime: {}", value);
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate the first `n` primes in ascending order.
///
/// Trial division by the primes found so far, up to the square root of the
/// candidate. Catalog sizes keep `n` in the hundreds, where this is instant.
pub fn first_primes(n: usize) -> Vec<PrimeCode> {
    let mut primes: Vec<u64> = Vec::with_capacity(n);
    let mut candidate = 2u64;

    while primes.len() < n {
        let composite = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .any(|&p| candidate % p == 0);
        if !composite {
            primes.push(candidate);
        }
        candidate += 1;
    }

    primes.into_iter().map(PrimeCode).collect()
}

fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }
    let mut divisor = 2u64;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes() {
        let values: Vec<u64> = first_primes(10).into_iter().map(PrimeCode::value).collect();
        assert_eq!(values, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_first_primes_empty() {
        assert!(first_primes(0).is_empty());
    }

    #[test]
    fn test_hundredth_prime() {
        let primes = first_primes(100);
        assert_eq!(primes.len(), 100);
        assert_eq!(primes[99].value(), 541);
    }

    #[test]
    fn test_prime_code_new() {
        assert_eq!(PrimeCode::new(13).value(), 13);
        assert!(!is_prime(1));
        assert!(!is_prime(15));
        assert!(is_prime(2));
    }

    #[test]
    #[should_panic(expected = "Not a prime")]
    fn test_prime_code_rejects_composite() {
        PrimeCode::new(9);
    }
}
