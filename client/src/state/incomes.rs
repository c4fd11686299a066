//! Read-only income list state.

#[cfg(test)]
#[path = "incomes_test.rs"]
mod incomes_test;

use records::Income;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomesState {
    /// Records in the order they were received.
    pub items: Vec<Income>,
}

impl IncomesState {
    /// Append a response's records after whatever is already listed.
    pub fn append(&mut self, incomes: Vec<Income>) {
        self.items.extend(incomes);
    }

    /// One `"<budget_amount> - <created_at>"` line per record.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.items.iter().map(Income::list_entry).collect()
    }
}
