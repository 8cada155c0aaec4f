// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by a [`Selector`](crate::context::Selector), one per kind of
//! selection event.

use crate::state::Toggle;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Selections,
    Deselections,
    Replacements,
    RejectedToggles,
    /// Toggles after which the selection identified a variant.
    Resolutions,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Count an applied toggle under the counter for its action.
    pub fn record_toggle(&mut self, toggle: &Toggle) {
        let counter = match toggle {
            Toggle::Selected { .. } => Counters::Selections,
            Toggle::Deselected { .. } => Counters::Deselections,
            Toggle::Replaced { .. } => Counters::Replacements,
        };
        self.increment_counter(counter);
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Set every counter back to zero.
    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}
