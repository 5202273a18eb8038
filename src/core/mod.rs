pub mod aggregate;
pub mod amount;
pub mod ledger;
pub mod transaction;

// Flat public surface for the ledger engine.
pub use aggregate::{
    expense_distribution, income_usage_distribution, overspend, share_percent, total_expenses,
    total_income, unused_income, Slice, Summary, UNUSED_LABEL, USED_LABEL,
};
pub use amount::{parse_amount, parse_label};
pub use ledger::{Ledger, Snapshot};
pub use transaction::{LedgerError, Transaction, TransactionKind, UnknownKind};
