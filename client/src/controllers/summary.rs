//! Spending summary loader (per-category totals and, with a year, per-month totals).

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use records::ExpenseApi;

use crate::state::store::Store;
use crate::state::summary::SummaryState;

pub struct SummaryController<A, S> {
    api: A,
    summary: S,
}

impl<A, S> SummaryController<A, S>
where
    A: ExpenseApi,
    S: Store<SummaryState>,
{
    pub fn new(api: A, summary: S) -> Self {
        Self { api, summary }
    }

    /// Reload both summaries. Monthly totals are only requested for a non-blank `year`.
    pub async fn refresh(&self, year: Option<&str>) {
        let year = year.map(str::trim).filter(|y| !y.is_empty()).map(str::to_owned);
        self.summary.update_with(SummaryState::begin);

        let by_category = self.api.category_summary().await;
        if let Err(err) = &by_category {
            log::warn!("category summary request failed: {err}");
        }
        self.summary.update_with(|s| s.finish_category(by_category));

        let monthly = match year.as_deref() {
            Some(year) => Some(self.api.monthly_summary(year).await),
            None => None,
        };
        if let Some(Err(err)) = &monthly {
            log::warn!("monthly summary request failed: {err}");
        }
        self.summary.update_with(|s| {
            s.finish_monthly(year, monthly);
            s.end();
        });
    }
}
