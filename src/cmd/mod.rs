pub mod chart;
pub mod list;
pub mod schema;
pub mod session;
pub mod summary;

use anyhow::Context;
use budgetbuddy::core::{Ledger, TransactionKind};
use clap::Args;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// JSON input root
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LedgerInput {
    pub entries: Vec<EntryRecord>,
}

/// One income or expense entry as read from CSV or JSON
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntryRecord {
    /// Target collection: "income" or "expense"
    pub kind: TransactionKind,
    /// Display label, must not be blank
    pub label: String,
    /// Non-negative amount written as text, e.g. "800" or "12.50"
    pub amount: String,
}

/// Input and removal flags shared by the report commands
#[derive(Args, Debug)]
pub struct LedgerArgs {
    /// CSV or JSON file of entries ("-" reads stdin)
    #[arg(short, long)]
    entries: PathBuf,

    /// Income positions to drop before reporting (e.g. 0,2)
    #[arg(long, value_delimiter = ',')]
    remove_income: Vec<usize>,

    /// Expense positions to drop before reporting (e.g. 0,2)
    #[arg(long, value_delimiter = ',')]
    remove_expense: Vec<usize>,
}

impl LedgerArgs {
    /// Build the ledger from the input, then apply any requested removals
    pub fn load(&self) -> anyhow::Result<Ledger> {
        let mut ledger = read_ledger(&self.entries)?;
        if !self.remove_income.is_empty() {
            let n = ledger.remove_at(TransactionKind::Income, self.remove_income.iter().copied());
            log::info!("Removed {} income entries", n);
        }
        if !self.remove_expense.is_empty() {
            let n = ledger.remove_at(TransactionKind::Expense, self.remove_expense.iter().copied());
            log::info!("Removed {} expense entries", n);
        }
        Ok(ledger)
    }
}

/// Read entries (CSV or JSON) into a fresh ledger (or stdin with "-")
pub fn read_ledger(path: &Path) -> anyhow::Result<Ledger> {
    let records = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_from_file(path)?
    };

    let mut ledger = Ledger::new();
    for (i, record) in records.iter().enumerate() {
        ledger
            .add(record.kind, &record.label, &record.amount)
            .with_context(|| format!("entry {} ({} '{}')", i + 1, record.kind, record.label))?;
    }
    log::info!(
        "Loaded {} income and {} expense entries",
        ledger.len(TransactionKind::Income),
        ledger.len(TransactionKind::Expense)
    );
    Ok(ledger)
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<EntryRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        read_json(reader)
    } else {
        read_csv(reader)
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<EntryRecord>> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let looks_like_json = buffer
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'{');
    let cursor = io::Cursor::new(buffer);
    if looks_like_json {
        read_json(cursor)
    } else {
        read_csv(cursor)
    }
}

fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<EntryRecord>> {
    let input: LedgerInput = serde_json::from_reader(reader).context("parsing JSON entries")?;
    Ok(input.entries)
}

fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<EntryRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: EntryRecord = result.with_context(|| format!("CSV row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Format an amount for display with the configured currency symbol
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn csv_records_parse_kind_and_keep_amount_text() {
        let data = "kind,label,amount\nincome,Salary,2000\nexpense,Rent,800.00\n";
        let records = read_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, TransactionKind::Income);
        assert_eq!(records[1].amount, "800.00");
    }

    #[test]
    fn csv_unknown_kind_is_an_error() {
        let data = "kind,label,amount\nsavings,Pot,10\n";
        assert!(read_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn json_records_parse() {
        let data = r#"{"entries":[{"kind":"expense","label":"Food","amount":"200"}]}"#;
        let records = read_json(data.as_bytes()).unwrap();
        assert_eq!(records[0].kind, TransactionKind::Expense);
        assert_eq!(records[0].label, "Food");
    }

    #[test]
    fn format_amount_uses_two_places() {
        assert_eq!(format_amount("$", dec!(800)), "$800.00");
        assert_eq!(format_amount("£", dec!(12.5)), "£12.50");
    }
}
