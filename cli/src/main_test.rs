use std::cell::RefCell;

use clap::CommandFactory;
use records::{Amount, ChartSummary, Expense, Income};

use super::*;

#[derive(Default)]
struct RecordingApi {
    calls: RefCell<Vec<String>>,
    expenses: Vec<Expense>,
    fail_with: Option<ApiError>,
}

impl RecordingApi {
    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl ExpenseApi for RecordingApi {
    async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        self.record(format!("list {}", filter.query_string()))?;
        Ok(self.expenses.clone())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Expense, ApiError> {
        self.record(format!("get {expense_id}"))?;
        self.expenses.first().cloned().ok_or(ApiError::Status { status: 404 })
    }

    async fn create_expense(&self, category_name: &str, payload: &FormPayload) -> Result<(), ApiError> {
        self.record(format!("create {category_name} {}", payload.to_json()))
    }

    async fn update_expense(&self, expense_id: &str, payload: &FormPayload) -> Result<(), ApiError> {
        self.record(format!("update {expense_id} {}", payload.to_json()))
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {expense_id}"))
    }

    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        self.record("incomes".to_owned())?;
        Ok(vec![Income { id: None, budget_amount: Amount::new("300.00"), created_at: "t".to_owned() }])
    }

    async fn update_income(&self, payload: &FormPayload) -> Result<Income, ApiError> {
        self.record(format!("set income {}", payload.to_json()))?;
        let budget_amount = Amount::new(payload.get("budget_amount").unwrap_or_default());
        Ok(Income { id: Some("i1".to_owned()), budget_amount, created_at: "t".to_owned() })
    }

    async fn monthly_summary(&self, year: &str) -> Result<ChartSummary, ApiError> {
        self.record(format!("monthly {year}"))?;
        Ok(ChartSummary { labels: vec!["March".to_owned()], data: vec![12.0] })
    }

    async fn category_summary(&self) -> Result<ChartSummary, ApiError> {
        self.record("category".to_owned())?;
        Ok(ChartSummary::default())
    }
}

fn expense() -> Expense {
    Expense {
        id: "e1".to_owned(),
        amount: Amount::new("9.99"),
        description: "Book".to_owned(),
        category: Some("books".to_owned()),
        category_name: None,
        expense_date: "2024-05-05".to_owned(),
        location: String::new(),
        receipt: None,
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("expenses").chain(args.iter().copied())).unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn list_flags_become_filter_in_wire_order() {
    let cli = parse(&["--user-id", "u1", "list", "--category-name", "groceries", "--year", "2024", "--sort", "desc"]);
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(args.filter().query_string(), "?year=2024&category_name=groceries&sort=desc&");
}

#[test]
fn invalid_sort_is_rejected_by_parser() {
    assert!(Cli::try_parse_from(["expenses", "list", "--sort", "sideways"]).is_err());
}

#[test]
fn missing_user_id_is_reported_for_user_scoped_commands() {
    for args in [
        &["--user-id", "  ", "list"][..],
        &["add", "--category", "food", "--amount", "1", "--date", "2024-01-01"],
        &["summary", "category"],
        &["incomes", "set", "--budget-amount", "500"],
    ] {
        assert!(matches!(session(&parse(args)), Err(CliError::MissingUserId)), "{args:?}");
    }
}

#[test]
fn commands_addressed_by_id_or_token_need_no_user_id() {
    for args in [&["incomes"][..], &["show", "e1"], &["update", "e1", "--amount", "2"], &["delete", "e1"]] {
        let session = session(&parse(args)).unwrap();
        assert_eq!(session.user_id(), "", "{args:?}");
    }
}

#[test]
fn default_log_filter_targets_this_crate() {
    let crate_name = module_path!().split("::").next().unwrap();
    assert_eq!(default_log_filter(), format!("{crate_name}=warn"));
    assert_ne!(crate_name, "cli");
}

#[test]
fn session_carries_token_and_base_url() {
    let cli = parse(&["--base-url", "http://localhost:8000/", "--user-id", "u1", "--token", "abc", "incomes"]);
    let session = session(&cli).unwrap();
    assert_eq!(session.url("/incomes/"), "http://localhost:8000/incomes/");
    assert_eq!(session.authorization().as_deref(), Some("Token abc"));
}

#[test]
fn add_payload_matches_browser_form_keys() {
    let cli = parse(&["add", "--category", "food", "--amount", "12.50", "--date", "2024-04-01"]);
    let Command::Add(args) = cli.command else {
        panic!("expected add");
    };
    let payload = args.payload();
    let keys: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["amount", "description", "category_name", "expense_date", "location"]);
    assert_eq!(payload.get("description"), Some(""));
}

#[test]
fn update_payload_only_has_given_fields() {
    let cli = parse(&["update", "e1", "--amount", "3.00", "--date", "2024-01-02"]);
    let Command::Update(args) = cli.command else {
        panic!("expected update");
    };
    let payload = args.payload();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload.get("expense_date"), Some("2024-01-02"));
}

#[tokio::test]
async fn update_without_fields_sends_nothing() {
    let api = RecordingApi::default();
    let cli = parse(&["update", "e1"]);
    let result = execute(&api, cli.command, false).await;
    assert!(matches!(result, Err(CliError::NothingToUpdate)));
    assert!(api.calls.borrow().is_empty());
}

#[tokio::test]
async fn list_renders_table_or_json() {
    let api = RecordingApi { expenses: vec![expense()], ..RecordingApi::default() };

    let text = execute(&api, parse(&["list", "--month", "05"]).command, false).await.unwrap();
    assert!(text.starts_with("ID  AMOUNT"));
    assert!(text.contains("9.99"));

    let json = execute(&api, parse(&["list"]).command, true).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["amount"], "9.99");

    assert_eq!(*api.calls.borrow(), vec!["list ?month=05&".to_owned(), "list ?".to_owned()]);
}

#[tokio::test]
async fn add_posts_to_trimmed_category() {
    let api = RecordingApi::default();
    let cli = parse(&["add", "--category", " food ", "--amount", "1", "--date", "2024-01-01"]);
    let out = execute(&api, cli.command, false).await.unwrap();
    assert_eq!(out, "expense added\n");
    assert!(api.calls.borrow()[0].starts_with("create food "));
}

#[tokio::test]
async fn incomes_and_summaries_render_text() {
    let api = RecordingApi::default();
    assert_eq!(execute(&api, parse(&["incomes"]).command, false).await.unwrap(), "300.00 - t\n");
    let monthly = execute(&api, parse(&["summary", "monthly", "--year", "2024"]).command, false).await.unwrap();
    assert!(monthly.starts_with("Monthly totals 2024\n"));
    assert!(monthly.contains("March"));
}

#[tokio::test]
async fn api_errors_surface_with_server_detail() {
    let api = RecordingApi {
        fail_with: Some(ApiError::Rejected { status: 400, detail: "amount: required".to_owned() }),
        ..RecordingApi::default()
    };
    let err = execute(&api, parse(&["show", "e1"]).command, false).await.unwrap_err();
    assert_eq!(err.to_string(), "server rejected the request (400): amount: required");
}

#[tokio::test]
async fn delete_sends_expense_id() {
    let api = RecordingApi::default();
    let out = execute(&api, parse(&["delete", "e7"]).command, false).await.unwrap();
    assert_eq!(out, "expense e7 deleted\n");
    assert_eq!(*api.calls.borrow(), vec!["delete e7".to_owned()]);
}

#[tokio::test]
async fn incomes_set_puts_budget_amount_and_prints_record() {
    let api = RecordingApi::default();
    let cli = parse(&["--user-id", "u1", "incomes", "set", "--budget-amount", " 500.00 "]);
    assert!(session(&cli).is_ok());

    let out = execute(&api, cli.command, false).await.unwrap();
    assert_eq!(out, "500.00 - t\n");
    assert_eq!(*api.calls.borrow(), vec![r#"set income {"budget_amount":"500.00"}"#.to_owned()]);

    let json = execute(&api, parse(&["incomes", "set", "--budget-amount", "1"]).command, true).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["budget_amount"], "1");
}
