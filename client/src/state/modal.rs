//! Two-state visibility machine shared by the add and edit dialogs.
//!
//! Transitions: open → `Visible`; close button, backdrop click or a
//! successful submit → `Hidden`. There is no terminal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Which expense dialog an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit,
}

/// Visibility of one modal dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ModalVisibility {
    pub fn open(&mut self) {
        *self = Self::Visible;
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Handle a click on the dialog's backdrop. Returns whether it closed.
    pub fn dismiss_from_backdrop(&mut self) -> bool {
        if self.is_visible() {
            self.close();
            true
        } else {
            false
        }
    }

    /// CSS `display` value matching the state.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}
