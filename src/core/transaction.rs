use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid amount '{0}': expected a non-negative number such as 12 or 12.50")]
    InvalidAmount(String),
    #[error("invalid label: must not be empty")]
    InvalidLabel,
}

/// Which collection of the ledger an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown entry kind '{0}': expected 'income' or 'expense'")]
pub struct UnknownKind(String);

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A single labelled income or expense entry.
///
/// Only constructed through [`crate::core::Ledger::add`], so the label is
/// always non-blank and the amount never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    label: String,
    amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(label: String, amount: Decimal) -> Self {
        Self { label, amount }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
