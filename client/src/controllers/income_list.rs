//! Read-only income list loader.
//!
//! ERROR HANDLING
//! ==============
//! Failures are only logged (`log::error!`, the browser console). The list is
//! left as it was and nothing is retried.

#[cfg(test)]
#[path = "income_list_test.rs"]
mod income_list_test;

use records::ExpenseApi;

use crate::state::incomes::IncomesState;
use crate::state::store::Store;

pub struct IncomeListController<A, S> {
    api: A,
    incomes: S,
}

impl<A, S> IncomeListController<A, S>
where
    A: ExpenseApi,
    S: Store<IncomesState>,
{
    pub fn new(api: A, incomes: S) -> Self {
        Self { api, incomes }
    }

    /// Mount into `container` and load once. Without a container nothing is
    /// mounted and no request is made.
    pub async fn activate<E>(&self, container: Option<E>, mount: impl FnOnce(E)) -> bool {
        let Some(container) = container else {
            log::debug!("income list container not present; skipping");
            return false;
        };
        mount(container);
        self.load().await;
        true
    }

    /// Fetch incomes and append one entry per record in response order.
    pub async fn load(&self) -> bool {
        match self.api.list_incomes().await {
            Ok(incomes) => {
                log::debug!("loaded {} income records", incomes.len());
                self.incomes.update_with(|s| s.append(incomes)).is_some()
            }
            Err(err) => {
                log::error!("Error fetching incomes: {err}");
                false
            }
        }
    }
}
