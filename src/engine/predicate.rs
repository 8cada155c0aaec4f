// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compatibility predicates.
//!
//! A predicate decides whether a candidate value still fits some variant,
//! given the values selected in the *other* groups. Two are provided:
//!
//! - [`PairwisePredicate`]: the candidate must co-occur with each selected
//!   value separately. With three or more groups selected this can leave a
//!   value enabled that no single variant combines with the whole selection.
//! - [`JointPredicate`]: the candidate must co-occur with all selected values
//!   in one variant.
//!
//! Callers pick one through [`CompatibilityMode`] and never see the
//! difference.
//!
//! # Example
//!
//! ```
//! use sku_select::engine::{CompatibilityMode, CompatibilityPredicate};
//!
//! assert_eq!(CompatibilityMode::Pairwise.predicate().name(), "pairwise");
//! assert_eq!(CompatibilityMode::Joint.predicate().name(), "joint");
//! ```

use crate::index::VariantIndex;
use crate::model::{PrimeCode, VariantCode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::{Display, EnumIter, EnumString};

/// Trait for compatibility tests against a variant index.
pub trait CompatibilityPredicate: Debug + Send + Sync {
    /// Check whether `candidate` is reachable alongside `others`.
    ///
    /// `others` holds the primes of the values selected in groups other than
    /// the candidate's own. An empty `others` always admits.
    fn admits(&self, variants: &VariantIndex, candidate: PrimeCode, others: &[PrimeCode]) -> bool;

    /// Get the predicate name (for logging).
    fn name(&self) -> &str;
}

/// Candidate must share a variant with each other selection, one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwisePredicate;

impl CompatibilityPredicate for PairwisePredicate {
    fn admits(&self, variants: &VariantIndex, candidate: PrimeCode, others: &[PrimeCode]) -> bool {
        others.iter().all(|&selected| {
            variants.any_divisible_by(&VariantCode::from_primes([selected, candidate]))
        })
    }

    fn name(&self) -> &str {
        "pairwise"
    }
}

/// Candidate must share one variant with all other selections at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct JointPredicate;

impl CompatibilityPredicate for JointPredicate {
    fn admits(&self, variants: &VariantIndex, candidate: PrimeCode, others: &[PrimeCode]) -> bool {
        if others.is_empty() {
            return true;
        }
        let combined = VariantCode::from_primes(others.iter().copied()).with(candidate);
        variants.any_divisible_by(&combined)
    }

    fn name(&self) -> &str {
        "joint"
    }
}

/// Which compatibility predicate a catalog index uses.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CompatibilityMode {
    #[default]
    Pairwise,
    Joint,
}

impl CompatibilityMode {
    pub fn predicate(self) -> &'static dyn CompatibilityPredicate {
        match self {
            Self::Pairwise => &PairwisePredicate,
            Self::Joint => &JointPredicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueKeying;
    use crate::index::PrimeAssigner;
    use crate::model::{OptionGroup, OptionValue, Variant};
    use std::str::FromStr;

    /// Three groups where every pair of (Red, S, Gloss) occurs but never all three.
    fn fixture() -> (VariantIndex, Vec<PrimeCode>) {
        let groups = vec![
            OptionGroup::new("Color", ["Red", "Blue"]),
            OptionGroup::new("Size", ["S", "M"]),
            OptionGroup::new("Finish", ["Gloss", "Matte"]),
        ];
        let variants = vec![
            Variant::new("A", ["Red", "S", "Matte"]),
            Variant::new("B", ["Red", "M", "Gloss"]),
            Variant::new("C", ["Blue", "S", "Gloss"]),
        ];
        let primes = PrimeAssigner::build(&groups, ValueKeying::PerGroup);
        let index = VariantIndex::build(&variants, &groups, &primes).unwrap();
        let lookup = [(0, "Red"), (1, "S"), (2, "Gloss"), (1, "M")]
            .iter()
            .map(|&(g, v)| primes.prime_of(g, &OptionValue::from(v)).unwrap())
            .collect();
        (index, lookup)
    }

    #[test]
    fn test_empty_selection_admits() {
        let (index, p) = fixture();
        assert!(PairwisePredicate.admits(&index, p[0], &[]));
        assert!(JointPredicate.admits(&index, p[0], &[]));
    }

    #[test]
    fn test_single_other_selection_agrees() {
        let (index, p) = fixture();
        // Red with S: variant A.
        assert!(PairwisePredicate.admits(&index, p[0], &[p[1]]));
        assert!(JointPredicate.admits(&index, p[0], &[p[1]]));
    }

    #[test]
    fn test_pairwise_under_disables_three_groups() {
        let (index, p) = fixture();
        // Red+S (A) and Red+Gloss (B) exist, Red+S+Gloss does not.
        assert!(PairwisePredicate.admits(&index, p[0], &[p[1], p[2]]));
        assert!(!JointPredicate.admits(&index, p[0], &[p[1], p[2]]));
    }

    #[test]
    fn test_both_reject_missing_pair() {
        let (index, p) = fixture();
        // S and M never co-occur (same group, never in one variant).
        assert!(!PairwisePredicate.admits(&index, p[3], &[p[1]]));
        assert!(!JointPredicate.admits(&index, p[3], &[p[1]]));
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(CompatibilityMode::default(), CompatibilityMode::Pairwise);
        assert_eq!(CompatibilityMode::from_str("joint").unwrap(), CompatibilityMode::Joint);
        assert_eq!(CompatibilityMode::Joint.to_string(), "joint");
    }
}
