//! `expenses`: terminal client for the expense tracker REST API.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod http;
mod render;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use records::{ApiError, ApiSession, ExpenseApi, ExpenseFilter, FormPayload, SortOrder};
use serde::Serialize;

use crate::http::ReqwestApi;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing user id; pass --user-id or set EXPENSES_USER_ID")]
    MissingUserId,
    #[error("nothing to update; pass at least one field")]
    NothingToUpdate,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "expenses", about = "Expense tracker API CLI")]
struct Cli {
    #[arg(long, env = "EXPENSES_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "EXPENSES_USER_ID")]
    user_id: Option<String>,

    #[arg(long, env = "EXPENSES_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "EXPENSES_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print response bodies as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List expenses, optionally filtered.
    List(ListArgs),
    /// Show one expense.
    Show { expense_id: String },
    /// Create an expense in a category.
    Add(AddArgs),
    /// Update fields of an existing expense.
    Update(UpdateArgs),
    /// Delete one expense.
    Delete { expense_id: String },
    /// List budget incomes, or change the budget amount.
    Incomes {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },
    /// Spending totals.
    Summary(SummaryCommand),
}

impl Command {
    /// Commands whose endpoint path embeds the user id.
    fn needs_user_id(&self) -> bool {
        match self {
            Self::List(_) | Self::Add(_) | Self::Summary(_) => true,
            Self::Incomes { action } => action.is_some(),
            Self::Show { .. } | Self::Update(_) | Self::Delete { .. } => false,
        }
    }
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    month: Option<String>,
    #[arg(long)]
    category_name: Option<String>,
    #[arg(long)]
    sort: Option<SortOrder>,
}

impl ListArgs {
    fn filter(self) -> ExpenseFilter {
        ExpenseFilter {
            year: self.year.unwrap_or_default(),
            month: self.month.unwrap_or_default(),
            category_name: self.category_name.unwrap_or_default(),
            sort: self.sort,
        }
    }
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    category: String,
    #[arg(long)]
    amount: String,
    #[arg(long)]
    date: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    location: String,
}

impl AddArgs {
    /// Same keys the browser's add form sends.
    fn payload(&self) -> FormPayload {
        FormPayload::new()
            .with("amount", self.amount.as_str())
            .with("description", self.description.as_str())
            .with("category_name", self.category.as_str())
            .with("expense_date", self.date.as_str())
            .with("location", self.location.as_str())
    }
}

#[derive(Args, Debug)]
struct UpdateArgs {
    expense_id: String,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

impl UpdateArgs {
    /// Only the fields that were passed.
    fn payload(&self) -> FormPayload {
        [
            ("amount", &self.amount),
            ("description", &self.description),
            ("category", &self.category),
            ("expense_date", &self.date),
            ("location", &self.location),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
enum IncomeAction {
    /// Set the budget amount of the user's income record.
    Set {
        #[arg(long)]
        budget_amount: String,
    },
}

#[derive(Args, Debug)]
struct SummaryCommand {
    #[command(subcommand)]
    command: SummarySubcommand,
}

#[derive(Subcommand, Debug)]
enum SummarySubcommand {
    /// Totals per month of one year.
    Monthly {
        #[arg(long)]
        year: String,
    },
    /// Totals per category.
    Category,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter().into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::debug!(?err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Warnings from this crate only; `RUST_LOG` overrides it.
fn default_log_filter() -> String {
    format!("{}=warn", env!("CARGO_CRATE_NAME"))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session = session(&cli)?;
    let api = ReqwestApi::new(session, Duration::from_secs(cli.timeout_secs))?;
    let output = execute(&api, cli.command, cli.json).await?;
    print!("{output}");
    Ok(())
}

/// Build the request context; the user id is only required by user-scoped commands.
fn session(cli: &Cli) -> Result<ApiSession, CliError> {
    let user_id = cli.user_id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    let user_id = match user_id {
        Some(id) => id,
        None if cli.command.needs_user_id() => return Err(CliError::MissingUserId),
        None => "",
    };
    Ok(ApiSession::new(cli.base_url.as_str(), user_id).with_token(cli.token.clone()))
}

/// Run one command and return what should be printed.
async fn execute(api: &impl ExpenseApi, command: Command, json: bool) -> Result<String, CliError> {
    match command {
        Command::List(args) => {
            let expenses = api.list_expenses(&args.filter()).await?;
            output(json, &expenses, || render::expense_table(&expenses))
        }
        Command::Show { expense_id } => {
            let expense = api.get_expense(&expense_id).await?;
            output(json, &expense, || render::expense_detail(&expense))
        }
        Command::Add(args) => {
            api.create_expense(args.category.trim(), &args.payload()).await?;
            tracing::info!(category = %args.category, "expense created");
            Ok("expense added\n".to_owned())
        }
        Command::Update(args) => {
            let payload = args.payload();
            if payload.is_empty() {
                return Err(CliError::NothingToUpdate);
            }
            api.update_expense(&args.expense_id, &payload).await?;
            Ok(format!("expense {} updated\n", args.expense_id))
        }
        Command::Delete { expense_id } => {
            api.delete_expense(&expense_id).await?;
            tracing::info!(%expense_id, "expense deleted");
            Ok(format!("expense {expense_id} deleted\n"))
        }
        Command::Incomes { action: None } => {
            let incomes = api.list_incomes().await?;
            output(json, &incomes, || render::income_lines(&incomes))
        }
        Command::Incomes { action: Some(IncomeAction::Set { budget_amount }) } => {
            let payload = FormPayload::new().with("budget_amount", budget_amount.trim());
            let income = api.update_income(&payload).await?;
            output(json, &income, || render::income_lines(std::slice::from_ref(&income)))
        }
        Command::Summary(summary) => match summary.command {
            SummarySubcommand::Monthly { year } => {
                let chart = api.monthly_summary(year.trim()).await?;
                output(json, &chart, || render::summary_table(&format!("Monthly totals {year}"), &chart))
            }
            SummarySubcommand::Category => {
                let chart = api.category_summary().await?;
                output(json, &chart, || render::summary_table("Totals by category", &chart))
            }
        },
    }
}

fn output<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(value)? + "\n")
    } else {
        Ok(text())
    }
}
