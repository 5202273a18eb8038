//! Totals and chart-ready distributions derived from a ledger snapshot.
//!
//! Everything here is a pure function of its inputs.

use super::ledger::Snapshot;
use super::transaction::Transaction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const USED_LABEL: &str = "Income Used";
pub const UNUSED_LABEL: &str = "Income Unused";

/// One labelled share of a proportional chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub amount: Decimal,
}

impl Slice {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

fn sum(entries: &[Transaction]) -> Decimal {
    entries.iter().map(Transaction::amount).sum()
}

pub fn total_income(incomes: &[Transaction]) -> Decimal {
    sum(incomes)
}

pub fn total_expenses(expenses: &[Transaction]) -> Decimal {
    sum(expenses)
}

/// Income left after expenses, never below zero
pub fn unused_income(incomes: &[Transaction], expenses: &[Transaction]) -> Decimal {
    (total_income(incomes) - total_expenses(expenses)).max(Decimal::ZERO)
}

/// How far expenses exceed income, zero when within budget.
///
/// Complements [`unused_income`], which clamps an overspend to zero.
pub fn overspend(incomes: &[Transaction], expenses: &[Transaction]) -> Decimal {
    (total_expenses(expenses) - total_income(incomes)).max(Decimal::ZERO)
}

/// One slice per expense, in insertion order.
///
/// Empty when there are no expenses; callers need their own placeholder
/// since a proportional chart has nothing to draw.
pub fn expense_distribution(expenses: &[Transaction]) -> Vec<Slice> {
    expenses
        .iter()
        .map(|t| Slice::new(t.label(), t.amount().max(Decimal::ZERO)))
        .collect()
}

/// Used vs. unused income. Always exactly two slices, even when both are zero.
pub fn income_usage_distribution(
    incomes: &[Transaction],
    expenses: &[Transaction],
) -> [Slice; 2] {
    [
        Slice::new(USED_LABEL, total_expenses(expenses)),
        Slice::new(UNUSED_LABEL, unused_income(incomes, expenses)),
    ]
}

/// Percentage of `total` that `amount` represents, to one decimal place.
/// Zero when `total` is zero.
pub fn share_percent(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (amount / total * dec!(100)).round_dp(1)
}

/// Every total the presentation layer shows, computed in one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub unused_income: Decimal,
    pub overspend: Decimal,
}

impl Summary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let Snapshot { incomes, expenses } = snapshot;
        Summary {
            income_count: incomes.len(),
            expense_count: expenses.len(),
            total_income: total_income(incomes),
            total_expenses: total_expenses(expenses),
            unused_income: unused_income(incomes, expenses),
            overspend: overspend(incomes, expenses),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.overspend > Decimal::ZERO
    }
}
