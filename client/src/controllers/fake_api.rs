//! Recording in-memory `ExpenseApi` for controller tests.

use std::cell::RefCell;

use records::{ApiError, ChartSummary, Expense, ExpenseApi, ExpenseFilter, FormPayload, Income};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List(ExpenseFilter),
    Get(String),
    Create(String, FormPayload),
    Update(String, FormPayload),
    Delete(String),
    Incomes,
    SetIncome(FormPayload),
    Monthly(String),
    Category,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
    Incomes,
    SetIncome,
    Monthly,
    Category,
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Self::List(_) => Op::List,
            Self::Get(_) => Op::Get,
            Self::Create(..) => Op::Create,
            Self::Update(..) => Op::Update,
            Self::Delete(_) => Op::Delete,
            Self::Incomes => Op::Incomes,
            Self::SetIncome(_) => Op::SetIncome,
            Self::Monthly(_) => Op::Monthly,
            Self::Category => Op::Category,
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    /// Successive list responses; the last one repeats once the queue drains.
    pub list_responses: RefCell<Vec<Vec<Expense>>>,
    pub detail: Option<Expense>,
    pub incomes: Vec<Income>,
    pub monthly: ChartSummary,
    pub by_category: ChartSummary,
    pub failures: Vec<(Op, ApiError)>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lists(self, lists: Vec<Vec<Expense>>) -> Self {
        *self.list_responses.borrow_mut() = lists;
        self
    }

    #[must_use]
    pub fn failing(mut self, op: Op, err: ApiError) -> Self {
        self.failures.push((op, err));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.borrow().iter().filter(|c| c.op() == op).count()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let op = call.op();
        self.calls.borrow_mut().push(call);
        match self.failures.iter().find(|(failing, _)| *failing == op) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl ExpenseApi for FakeApi {
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        self.record(Call::List(filter.clone()))?;
        let mut queue = self.list_responses.borrow_mut();
        if queue.len() > 1 {
            Ok(queue.remove(0))
        } else {
            Ok(queue.first().cloned().unwrap_or_default())
        }
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError> {
        self.record(Call::Get(expense_id.to_owned()))?;
        self.detail.clone().ok_or(ApiError::Status { status: 404 })
    }

    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError> {
        self.record(Call::Create(category_name.to_owned(), payload.clone()))
    }

    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        self.record(Call::Update(expense_id.to_owned(), payload.clone()))
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(expense_id.to_owned()))
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        self.record(Call::Incomes)?;
        Ok(self.incomes.clone())
    }

    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError> {
        self.record(Call::SetIncome(payload.clone()))?;
        self.incomes.first().cloned().ok_or(ApiError::Status { status: 404 })
    }

    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError> {
        self.record(Call::Monthly(year.to_owned()))?;
        Ok(self.monthly.clone())
    }

    async fn category_summary(&self) -> Result<ChartSummary, ApiError> {
        self.record(Call::Category)?;
        Ok(self.by_category.clone())
    }
}
