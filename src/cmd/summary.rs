//! Summary command - income, expense and leftover totals

use super::{format_amount, LedgerArgs};
use budgetbuddy::core::{Ledger, Summary};
use clap::Args;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    ledger: LedgerArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl SummaryCommand {
    pub fn exec(&self, symbol: &str) -> anyhow::Result<()> {
        let ledger = self.ledger.load()?;
        if self.json {
            let summary = Summary::from_snapshot(&ledger.snapshot());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&ledger, symbol);
        }
        Ok(())
    }
}

pub fn print_summary(ledger: &Ledger, symbol: &str) {
    let s = Summary::from_snapshot(&ledger.snapshot());

    println!();
    println!("BUDGET SUMMARY");
    println!();
    println!(
        "  Income:   {} ({} entries)",
        format_amount(symbol, s.total_income),
        s.income_count
    );
    println!(
        "  Expenses: {} ({} entries)",
        format_amount(symbol, s.total_expenses),
        s.expense_count
    );
    println!("  Unused:   {}", format_amount(symbol, s.unused_income));
    if s.is_over_budget() {
        println!("  Over budget by {}", format_amount(symbol, s.overspend));
    }
    println!();
}
