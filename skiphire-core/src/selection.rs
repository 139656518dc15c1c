//! Single-choice selection state.

use crate::model::SkipId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which offering, if any, is currently chosen.
pub enum Selection {
    /// Nothing chosen yet, or the last choice was toggled off.
    #[default]
    NoneSelected,
    /// Exactly one offering is chosen.
    OneSelected(SkipId),
}

impl Selection {
    /// Apply a click on `id`: clicking the chosen offering clears the choice,
    /// any other offering replaces it.
    pub fn toggle(&mut self, id: SkipId) {
        *self = match *self {
            Self::OneSelected(current) if current == id => Self::NoneSelected,
            _ => Self::OneSelected(id),
        };
    }

    /// Identifier of the chosen offering.
    #[must_use]
    pub const fn selected(self) -> Option<SkipId> {
        match self {
            Self::NoneSelected => None,
            Self::OneSelected(id) => Some(id),
        }
    }

    /// Whether `id` is the chosen offering.
    #[must_use]
    pub fn is_selected(self, id: SkipId) -> bool {
        self.selected() == Some(id)
    }

    /// Drop the current choice.
    pub fn clear(&mut self) {
        *self = Self::NoneSelected;
    }
}
