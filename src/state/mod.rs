// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable selection state.
//!
//! This module contains everything that changes as a user picks options:
//! - SelectionState: one slot per option group
//! - Statistics: counters of selection events
//!
//! The catalog index never changes, so any number of independent selections
//! can read it at once.

pub mod selection;
pub mod statistics;

pub use selection::{SelectionState, Toggle};
pub use statistics::{Counters, Statistics};
