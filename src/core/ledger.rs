//! The ledger store: owns incomes and expenses and enforces entry validity.

use super::amount::{parse_amount, parse_label};
use super::transaction::{LedgerError, Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Ordered income and expense collections.
///
/// Entries are identified only by their position at the time of a call, so
/// removal takes indices from a prior [`Ledger::snapshot`] or
/// [`Ledger::entries`].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
}

/// Read-only copy of both ledger collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub incomes: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
}

impl Snapshot {
    pub fn into_parts(self) -> (Vec<Transaction>, Vec<Transaction>) {
        (self.incomes, self.expenses)
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an entry to the end of the `kind` collection.
    ///
    /// The amount is checked before the label. An amount that would push the
    /// collection total past `Decimal::MAX` is rejected as invalid, so totals
    /// never overflow. On error nothing is stored.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        label: &str,
        raw_amount: &str,
    ) -> Result<(), LedgerError> {
        let amount = parse_amount(raw_amount)?;
        self.total(kind)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::InvalidAmount(raw_amount.to_string()))?;
        let label = parse_label(label)?;

        log::debug!("Add {} '{}' {}", kind, label, amount);
        self.collection_mut(kind).push(Transaction::new(label, amount));
        Ok(())
    }

    /// Remove the entries at `indices` from the `kind` collection.
    ///
    /// Out of range indices are skipped and duplicates count once. Deletion
    /// runs from the highest index down so earlier positions stay valid.
    /// Returns how many entries were removed.
    pub fn remove_at<I>(&mut self, kind: TransactionKind, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let entries = self.collection_mut(kind);
        let len = entries.len();
        let (valid, ignored): (BTreeSet<usize>, BTreeSet<usize>) =
            indices.into_iter().partition(|&idx| idx < len);

        if !ignored.is_empty() {
            log::debug!(
                "Ignoring out of range {} indices {:?} (len {})",
                kind,
                ignored,
                len
            );
        }

        for &idx in valid.iter().rev() {
            let removed = entries.remove(idx);
            log::debug!("Remove {} #{} '{}'", kind, idx, removed.label());
        }
        valid.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            incomes: self.incomes.clone(),
            expenses: self.expenses.clone(),
        }
    }

    pub fn entries(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.incomes,
            TransactionKind::Expense => &self.expenses,
        }
    }

    pub fn len(&self, kind: TransactionKind) -> usize {
        self.entries(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    /// Drop every entry from both collections
    pub fn clear(&mut self) {
        self.incomes.clear();
        self.expenses.clear();
    }

    fn total(&self, kind: TransactionKind) -> Decimal {
        self.entries(kind).iter().map(Transaction::amount).sum()
    }

    fn collection_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Income => &mut self.incomes,
            TransactionKind::Expense => &mut self.expenses,
        }
    }
}
