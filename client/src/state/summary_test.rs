use super::*;

fn chart(labels: &[&str], data: &[f64]) -> ChartSummary {
    ChartSummary {
        labels: labels.iter().map(|l| (*l).to_owned()).collect(),
        data: data.to_vec(),
    }
}

#[test]
fn begin_clears_previous_error() {
    let mut state = SummaryState { error: Some("old".to_owned()), ..SummaryState::default() };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    state.end();
    assert!(!state.loading);
}

#[test]
fn category_and_monthly_results_are_stored() {
    let mut state = SummaryState::default();
    state.finish_category(Ok(chart(&["rent"], &[900.0])));
    state.finish_monthly(Some("2024".to_owned()), Some(Ok(chart(&["Jan"], &[10.0]))));
    assert_eq!(state.by_category.as_ref().unwrap().labels, vec!["rent".to_owned()]);
    assert_eq!(state.monthly_year.as_deref(), Some("2024"));
}

#[test]
fn monthly_is_cleared_without_year() {
    let mut state = SummaryState::default();
    state.finish_monthly(Some("2024".to_owned()), Some(Ok(chart(&["Jan"], &[1.0]))));
    state.finish_monthly(None, None);
    assert!(state.monthly.is_none());
    assert!(state.monthly_year.is_none());
}

#[test]
fn errors_accumulate_and_keep_previous_data() {
    let mut state = SummaryState::default();
    state.finish_category(Ok(chart(&["fuel"], &[20.0])));
    state.finish_category(Err(ApiError::Status { status: 500 }));
    state.finish_monthly(Some("2024".to_owned()), Some(Err(ApiError::Transport("offline".to_owned()))));
    assert!(state.by_category.is_some());
    assert_eq!(
        state.error.as_deref(),
        Some(
            "Could not load category totals: server responded with status 500; \
             Could not load monthly totals: request failed: offline"
        )
    );
}
