//! Spending summary state (per-category and per-month totals).

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use records::{ApiError, ChartSummary};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    pub by_category: Option<ChartSummary>,
    pub monthly: Option<ChartSummary>,
    /// Year the monthly totals belong to.
    pub monthly_year: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SummaryState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_category(&mut self, result: Result<ChartSummary, ApiError>) {
        match result {
            Ok(summary) => self.by_category = Some(summary),
            Err(err) => self.record_error("category totals", &err),
        }
    }

    /// Apply monthly totals; `year` of `None` means no year was selected.
    pub fn finish_monthly(&mut self, year: Option<String>, result: Option<Result<ChartSummary, ApiError>>) {
        match result {
            None => {
                self.monthly = None;
                self.monthly_year = None;
            }
            Some(Ok(summary)) => {
                self.monthly = Some(summary);
                self.monthly_year = year;
            }
            Some(Err(err)) => self.record_error("monthly totals", &err),
        }
    }

    pub fn end(&mut self) {
        self.loading = false;
    }

    fn record_error(&mut self, what: &str, err: &ApiError) {
        let message = format!("Could not load {what}: {err}");
        self.error = Some(match self.error.take() {
            Some(previous) => format!("{previous}; {message}"),
            None => message,
        });
    }
}
