//! Append-only bill ledger.

use chrono::NaiveDate;
use domain::{Bill, Money};
use serde::Serialize;

/// Bills created on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerDay {
    pub date: NaiveDate,
    pub bills: Vec<Bill>,
    pub count: usize,
    /// Sum of the grand totals of `bills`.
    pub total: Money,
}

/// Ordered sequence of completed bills.
///
/// Bills are only ever appended; there is no way to change or remove one.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    bills: Vec<Bill>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bill. The bill number is assigned by the caller.
    pub fn append(&mut self, bill: Bill) {
        self.bills.push(bill);
    }

    /// Returns every bill in append order.
    pub fn all(&self) -> &[Bill] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Returns the bills whose creation timestamp falls on `date` (UTC).
    pub fn on_date(&self, date: NaiveDate) -> LedgerDay {
        let bills: Vec<Bill> = self
            .bills
            .iter()
            .filter(|b| b.created_at.date_naive() == date)
            .cloned()
            .collect();
        let total = bills.iter().map(|b| b.grand_total).sum();

        LedgerDay {
            date,
            count: bills.len(),
            bills,
            total,
        }
    }
}
