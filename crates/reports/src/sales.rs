//! Daily sales totals.

use chrono::NaiveDate;
use domain::Money;
use serde::Serialize;
use store::LedgerDay;

/// Number of bills and total takings for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySalesReport {
    pub date: NaiveDate,
    pub bill_count: usize,
    /// Sum of bill grand totals, tax included.
    pub total_sales: Money,
}

impl From<LedgerDay> for DailySalesReport {
    fn from(day: LedgerDay) -> Self {
        Self {
            date: day.date,
            bill_count: day.count,
            total_sales: day.total,
        }
    }
}
