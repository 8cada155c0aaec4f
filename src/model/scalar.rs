// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scalar type for option values and variant identities.
//!
//! Catalogs identify option values and variants by plain scalars, either text
//! ("Red", "XL") or integers (42). Equality is by value: `Text("1")` and
//! `Integer(1)` are different scalars.
//!
//! # Examples
//!
//! ```
//! use sku_select::model::Scalar;
//!
//! let red = Scalar::from("Red");
//! let size = Scalar::from(42);
//!
//! assert_eq!(red.to_string(), "Red");
//! assert_eq!(size.to_string(), "42");
//! assert_ne!(Scalar::from("42"), size);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A text or integer scalar.
///
/// Floating point numbers are not scalars: they have no total equality, so
/// they cannot key the prime map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Text(String),
}

/// One selectable choice within an option group.
pub type OptionValue = Scalar;

/// External identity of a catalog variant.
pub type VariantId = Scalar;

impl Scalar {
    /// Extract a scalar from a JSON value.
    ///
    /// Returns None for objects, arrays, booleans, null and non-integer numbers.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => number.as_i64().map(Self::Integer),
            _ => None,
        }
    }

}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}
