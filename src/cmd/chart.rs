//! Chart command - expense distribution and income usage as proportional shares

use super::{format_amount, LedgerArgs};
use budgetbuddy::core::{
    expense_distribution, income_usage_distribution, share_percent, Ledger, Slice,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ChartCommand {
    #[command(flatten)]
    ledger: LedgerArgs,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,
}

/// Chart data for JSON output
#[derive(Debug, Serialize)]
struct ChartData {
    expense_distribution: Vec<ChartSlice>,
    income_usage: Vec<ChartSlice>,
}

#[derive(Debug, Serialize)]
struct ChartSlice {
    label: String,
    amount: String,
    percent: String,
}

#[derive(Debug, Tabled)]
struct SliceRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl ChartCommand {
    pub fn exec(&self, symbol: &str) -> anyhow::Result<()> {
        let ledger = self.ledger.load()?;
        if self.json {
            let snapshot = ledger.snapshot();
            let data = ChartData {
                expense_distribution: chart_slices(&expense_distribution(&snapshot.expenses)),
                income_usage: chart_slices(&income_usage_distribution(
                    &snapshot.incomes,
                    &snapshot.expenses,
                )),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_charts(&ledger, symbol);
        }
        Ok(())
    }
}

fn slices_total(slices: &[Slice]) -> Decimal {
    slices.iter().map(|s| s.amount).sum()
}

fn chart_slices(slices: &[Slice]) -> Vec<ChartSlice> {
    let total = slices_total(slices);
    slices
        .iter()
        .map(|s| ChartSlice {
            label: s.label.clone(),
            amount: format!("{:.2}", s.amount),
            percent: format!("{:.1}", share_percent(s.amount, total)),
        })
        .collect()
}

fn slice_table(slices: &[Slice], symbol: &str) -> String {
    let total = slices_total(slices);
    let rows = slices.iter().map(|s| SliceRow {
        label: s.label.clone(),
        amount: format_amount(symbol, s.amount),
        share: format!("{:.1}%", share_percent(s.amount, total)),
    });
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

pub fn print_charts(ledger: &Ledger, symbol: &str) {
    let snapshot = ledger.snapshot();

    println!("EXPENSE DISTRIBUTION");
    let expenses = expense_distribution(&snapshot.expenses);
    if expenses.is_empty() {
        println!("  No Expense Data");
    } else {
        println!("{}", slice_table(&expenses, symbol));
    }
    println!();

    println!("INCOME USAGE");
    let usage = income_usage_distribution(&snapshot.incomes, &snapshot.expenses);
    println!("{}", slice_table(&usage, symbol));
    println!();
}
