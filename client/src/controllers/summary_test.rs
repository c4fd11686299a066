use std::cell::RefCell;

use futures::executor::block_on;
use records::{ApiError, ChartSummary};

use super::*;
use crate::controllers::fake_api::{Call, FakeApi, Op};

fn chart(label: &str, value: f64) -> ChartSummary {
    ChartSummary { labels: vec![label.to_owned()], data: vec![value] }
}

#[test]
fn without_year_only_category_totals_are_requested() {
    let api = FakeApi { by_category: chart("rent", 900.0), ..FakeApi::new() };
    let summary = RefCell::new(SummaryState::default());

    block_on(SummaryController::new(&api, &summary).refresh(None));

    assert_eq!(api.calls(), vec![Call::Category]);
    let state = summary.borrow();
    assert_eq!(state.by_category, Some(chart("rent", 900.0)));
    assert!(state.monthly.is_none());
    assert!(!state.loading);
}

#[test]
fn blank_year_counts_as_absent() {
    let api = FakeApi::new();
    let summary = RefCell::new(SummaryState::default());
    block_on(SummaryController::new(&api, &summary).refresh(Some("  ")));
    assert_eq!(api.count(Op::Monthly), 0);
}

#[test]
fn year_requests_monthly_totals() {
    let api = FakeApi { monthly: chart("March", 42.0), ..FakeApi::new() };
    let summary = RefCell::new(SummaryState::default());

    block_on(SummaryController::new(&api, &summary).refresh(Some(" 2024 ")));

    assert_eq!(api.calls(), vec![Call::Category, Call::Monthly("2024".to_owned())]);
    assert_eq!(summary.borrow().monthly_year.as_deref(), Some("2024"));
    assert_eq!(summary.borrow().monthly, Some(chart("March", 42.0)));
}

#[test]
fn failures_set_summary_error_only() {
    let api = FakeApi { monthly: chart("Jan", 1.0), ..FakeApi::new() }
        .failing(Op::Category, ApiError::Transport("offline".to_owned()));
    let summary = RefCell::new(SummaryState::default());

    block_on(SummaryController::new(&api, &summary).refresh(Some("2024")));

    let state = summary.borrow();
    assert_eq!(state.error.as_deref(), Some("Could not load category totals: request failed: offline"));
    assert_eq!(state.monthly, Some(chart("Jan", 1.0)));
    assert!(!state.loading);
}
