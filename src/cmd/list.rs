//! List command - both collections with the positions used for removal

use super::{format_amount, LedgerArgs};
use budgetbuddy::core::{Ledger, Transaction, TransactionKind};
use clap::Args;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(flatten)]
    ledger: LedgerArgs,

    /// Output as CSV instead of formatted tables
    #[arg(long)]
    csv: bool,
}

/// Row for the entries table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct EntryRow {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "Kind")]
    pub kind: TransactionKind,

    #[tabled(rename = "Label")]
    pub label: String,

    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl ListCommand {
    pub fn exec(&self, symbol: &str) -> anyhow::Result<()> {
        let ledger = self.ledger.load()?;
        if self.csv {
            write_csv(&ledger, io::stdout())
        } else {
            print_tables(&ledger, symbol);
            Ok(())
        }
    }
}

fn rows(
    kind: TransactionKind,
    entries: &[Transaction],
    fmt: impl Fn(&Transaction) -> String,
) -> Vec<EntryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, t)| EntryRow {
            index,
            kind,
            label: t.label().to_string(),
            amount: fmt(t),
        })
        .collect()
}

pub fn print_tables(ledger: &Ledger, symbol: &str) {
    for (title, kind) in [
        ("INCOMES", TransactionKind::Income),
        ("EXPENSES", TransactionKind::Expense),
    ] {
        println!("{}", title);
        let entries = ledger.entries(kind);
        if entries.is_empty() {
            println!("  (none)");
        } else {
            let rows = rows(kind, entries, |t| format_amount(symbol, t.amount()));
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        println!();
    }
}

fn write_csv<W: io::Write>(ledger: &Ledger, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for kind in [TransactionKind::Income, TransactionKind::Expense] {
        for row in rows(kind, ledger.entries(kind), |t| t.amount().to_string()) {
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_lists_incomes_then_expenses_with_positions() {
        let mut ledger = Ledger::new();
        ledger.add(TransactionKind::Expense, "Rent", "800").unwrap();
        ledger.add(TransactionKind::Income, "Salary", "2000").unwrap();
        ledger.add(TransactionKind::Expense, "Food", "200.5").unwrap();

        let mut out = Vec::new();
        write_csv(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,kind,label,amount",
                "0,income,Salary,2000",
                "0,expense,Rent,800",
                "1,expense,Food,200.5",
            ]
        );
    }
}
