//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use records::{ChartSummary, Expense, Income};

const EXPENSE_HEADERS: [&str; 6] = ["ID", "AMOUNT", "DESCRIPTION", "CATEGORY", "DATE", "LOCATION"];

/// Left-aligned columns separated by two spaces; amounts are right-aligned.
pub fn expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "no expenses\n".to_owned();
    }
    let rows: Vec<[String; 6]> = expenses
        .iter()
        .map(|e| {
            [
                e.id.clone(),
                e.amount.to_string(),
                e.description.clone(),
                e.category_label().to_owned(),
                e.expense_date.clone(),
                e.location.clone(),
            ]
        })
        .collect();

    let mut widths = EXPENSE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &EXPENSE_HEADERS.map(str::to_owned), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == 1 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One `field: value` line per attribute.
pub fn expense_detail(expense: &Expense) -> String {
    let mut out = String::new();
    for (label, value) in [
        ("id", expense.id.as_str()),
        ("amount", expense.amount.as_str()),
        ("description", expense.description.as_str()),
        ("category", expense.category_label()),
        ("date", expense.expense_date.as_str()),
        ("location", expense.location.as_str()),
        ("receipt", expense.receipt.as_deref().unwrap_or("-")),
    ] {
        let _ = writeln!(out, "{label:<12} {value}");
    }
    out
}

/// `"<budget_amount> - <created_at>"` per record, in response order.
pub fn income_lines(incomes: &[Income]) -> String {
    incomes.iter().map(|i| i.list_entry() + "\n").collect()
}

/// Label/total rows followed by a total line.
pub fn summary_table(title: &str, chart: &ChartSummary) -> String {
    let width = chart
        .rows()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max("TOTAL".len());
    let mut out = format!("{title}\n");
    for (label, value) in chart.rows() {
        let _ = writeln!(out, "  {label:<width$}  {value:>10.2}");
    }
    let _ = writeln!(out, "  {:<width$}  {:>10.2}", "TOTAL", chart.total());
    out
}
