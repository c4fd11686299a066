//! User-visible status messages for expense operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request on the expense page becomes a [`Notice`] instead of
//! an unhandled rejection. A later success of the same operation clears it.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use records::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

/// Operation a notice reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    LoadExpenses,
    OpenExpense,
    CreateExpense,
    UpdateExpense,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Self::LoadExpenses => "Could not load expenses",
            Self::OpenExpense => "Could not open expense",
            Self::CreateExpense => "Could not add expense",
            Self::UpdateExpense => "Could not update expense",
        }
    }

    fn success_message(self) -> Option<&'static str> {
        match self {
            Self::CreateExpense => Some("Expense added."),
            Self::UpdateExpense => Some("Expense updated."),
            Self::LoadExpenses | Self::OpenExpense => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub origin: Operation,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn failure(origin: Operation, err: &ApiError) -> Self {
        Self {
            level: NoticeLevel::Error,
            origin,
            message: format!("{}: {err}", origin.failure_prefix()),
        }
    }

    /// Confirmation for operations that have one.
    #[must_use]
    pub fn success(origin: Operation) -> Option<Self> {
        origin.success_message().map(|message| Self {
            level: NoticeLevel::Info,
            origin,
            message: message.to_owned(),
        })
    }
}
