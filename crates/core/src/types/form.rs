//! Dirty-tracking state for single-submit forms.

use serde::{Deserialize, Serialize};

/// Current form input plus the snapshot taken at the last save.
///
/// Submission is only allowed while the form is dirty, i.e. the input differs
/// from what was last submitted. Saving resets the snapshot to the submitted
/// values, so re-submitting the same input requires editing it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormState<T> {
    current: T,
    clean: T,
}

impl<T: Clone + PartialEq> FormState<T> {
    /// Start a form whose input equals its snapshot (not dirty).
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            clean: initial,
        }
    }

    /// Current input.
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// Snapshot of the last submitted input.
    #[must_use]
    pub const fn clean(&self) -> &T {
        &self.clean
    }

    /// Replace the current input.
    pub fn edit(&mut self, values: T) {
        self.current = values;
    }

    /// Whether the input differs from the last submitted snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.clean
    }

    /// Take the current input for submission and reset the snapshot to it.
    pub fn save(&mut self) -> T {
        self.clean = self.current.clone();
        self.current.clone()
    }
}
