// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The user's partial selection: one slot per option group.

use crate::model::OptionValue;
use serde::Serialize;

/// What a toggle did to its group's slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Toggle {
    /// The slot was empty and now holds the value.
    Selected { group: usize },
    /// The slot held the value and is now empty.
    Deselected { group: usize },
    /// The slot held another value, which the new one displaced.
    Replaced { group: usize, previous: OptionValue },
}

impl Toggle {
    pub fn group(&self) -> usize {
        match self {
            Self::Selected { group }
            | Self::Deselected { group }
            | Self::Replaced { group, .. } => *group,
        }
    }
}

/// Current choice per option group.
///
/// Always has exactly one slot per group of the catalog that created it, each
/// empty or holding a single value. Slots are written only through
/// [`CatalogIndex::toggle`](crate::index::CatalogIndex::toggle), which checks
/// the value against the catalog first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionState {
    slots: Vec<Option<OptionValue>>,
}

impl SelectionState {
    /// Create an empty selection for `groups` option groups.
    pub(crate) fn new(groups: usize) -> Self {
        Self {
            slots: vec![None; groups],
        }
    }

    /// Flip `value` in slot `group`: clear it if it is there, otherwise
    /// put it there in place of whatever was selected.
    ///
    /// # Panics
    ///
    /// Panics if `group` is out of range.
    pub(crate) fn apply(&mut self, group: usize, value: &OptionValue) -> Toggle {
        let slot = &mut self.slots[group];
        match slot.take() {
            Some(current) if current == *value => Toggle::Deselected { group },
            Some(previous) => {
                *slot = Some(value.clone());
                Toggle::Replaced { group, previous }
            }
            None => {
                *slot = Some(value.clone());
                Toggle::Selected { group }
            }
        }
    }

    /// The value selected in `group`, if any.
    pub fn slot(&self, group: usize) -> Option<&OptionValue> {
        self.slots.get(group).and_then(Option::as_ref)
    }

    /// Iterate over (group, value) for every non-empty slot, in group order.
    pub fn selected(&self) -> impl Iterator<Item = (usize, &OptionValue)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(group, slot)| slot.as_ref().map(|value| (group, value)))
    }

    /// Number of groups with a selection.
    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether every group has a selection.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check whether no group has a selection.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots (one per option group).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn slots(&self) -> &[Option<OptionValue>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> OptionValue {
        OptionValue::from(text)
    }

    #[test]
    fn test_new_is_empty() {
        let state = SelectionState::new(3);
        assert_eq!(state.len(), 3);
        assert!(state.is_empty());
        assert!(!state.is_complete());
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.slot(5), None);
    }

    #[test]
    fn test_apply_select_deselect() {
        let mut state = SelectionState::new(2);
        assert_eq!(state.apply(1, &v("S")), Toggle::Selected { group: 1 });
        assert_eq!(state.slot(1), Some(&v("S")));

        assert_eq!(state.apply(1, &v("S")), Toggle::Deselected { group: 1 });
        assert_eq!(state.slot(1), None);
        assert_eq!(state, SelectionState::new(2));
    }

    #[test]
    fn test_apply_replace() {
        let mut state = SelectionState::new(2);
        state.apply(0, &v("Red"));
        let toggle = state.apply(0, &v("Blue"));

        assert_eq!(
            toggle,
            Toggle::Replaced {
                group: 0,
                previous: v("Red")
            }
        );
        assert_eq!(toggle.group(), 0);
        assert_eq!(state.slot(0), Some(&v("Blue")));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_selected_and_clear() {
        let mut state = SelectionState::new(3);
        state.apply(2, &v("Gloss"));
        state.apply(0, &v("Red"));

        let selected: Vec<_> = state.selected().collect();
        assert_eq!(selected, vec![(0, &v("Red")), (2, &v("Gloss"))]);

        state.apply(1, &v("M"));
        assert!(state.is_complete());

        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_toggle_serializes_with_action_tag() {
        let toggle = Toggle::Replaced {
            group: 0,
            previous: v("Red"),
        };
        assert_eq!(
            serde_json::to_string(&toggle).unwrap(),
            r#"{"action":"replaced","group":0,"previous":"Red"}"#
        );
    }
}
