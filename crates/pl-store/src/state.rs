//! Store state and partial updates.

use pl_core::SportData;
use pl_ranking::Selection;

/// Canonical store state. Selectors only ever see it by shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub sport_data: Option<SportData>,
    pub selected: Option<Selection>,
}

impl State {
    /// Names of the top-level fields currently set, for error reports.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.sport_data.is_some() {
            keys.push("sport_data");
        }
        if self.selected.is_some() {
            keys.push("selected");
        }
        keys
    }
}

/// Partial state update: every `Some` field replaces the current one.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub sport_data: Option<SportData>,
    pub selected: Option<Selection>,
}

impl StatePatch {
    pub fn selected(selection: Selection) -> Self {
        Self {
            selected: Some(selection),
            ..Self::default()
        }
    }

    pub fn sport_data(data: SportData) -> Self {
        Self {
            sport_data: Some(data),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, state: &mut State) {
        if let Some(data) = self.sport_data {
            state.sport_data = Some(data);
        }
        if let Some(selected) = self.selected {
            state.selected = Some(selected);
        }
    }
}
