use std::cell::RefCell;

use futures::executor::block_on;
use records::{Amount, ApiError, Income};

use super::*;
use crate::controllers::fake_api::{FakeApi, Op};

fn income(amount: &str, created_at: &str) -> Income {
    Income { id: None, budget_amount: Amount::new(amount), created_at: created_at.to_owned() }
}

#[test]
fn absent_container_issues_no_request() {
    let api = FakeApi::new();
    let incomes = RefCell::new(IncomesState::default());
    let controller = IncomeListController::new(&api, &incomes);

    let mut mounted = false;
    let activated = block_on(controller.activate(None::<()>, |()| mounted = true));

    assert!(!activated);
    assert!(!mounted);
    assert!(api.calls().is_empty());
}

#[test]
fn present_container_mounts_then_loads_in_order() {
    let api = FakeApi {
        incomes: vec![income("500.00", "2024-01-01T10:00:00Z"), income("75.25", "2024-02-01T09:30:00Z")],
        ..FakeApi::new()
    };
    let incomes = RefCell::new(IncomesState::default());
    let controller = IncomeListController::new(&api, &incomes);

    let mut mounted = None;
    assert!(block_on(controller.activate(Some("income-list"), |id| mounted = Some(id))));

    assert_eq!(mounted, Some("income-list"));
    assert_eq!(api.count(Op::Incomes), 1);
    assert_eq!(
        incomes.borrow().entries(),
        vec![
            "500.00 - 2024-01-01T10:00:00Z".to_owned(),
            "75.25 - 2024-02-01T09:30:00Z".to_owned(),
        ]
    );
}

#[test]
fn failed_load_leaves_list_unchanged() {
    let api = FakeApi::new().failing(Op::Incomes, ApiError::Status { status: 401 });
    let incomes = RefCell::new(IncomesState::default());
    incomes.borrow_mut().append(vec![income("1.00", "t")]);
    let controller = IncomeListController::new(&api, &incomes);

    assert!(!block_on(controller.load()));
    assert_eq!(incomes.borrow().entries(), vec!["1.00 - t".to_owned()]);
    assert_eq!(api.count(Op::Incomes), 1);
}
