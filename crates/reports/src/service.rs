//! Report queries against a [`PosStore`].

use chrono::{NaiveDate, Utc};
use domain::LOW_STOCK_THRESHOLD;
use store::PosStore;

use crate::inventory::InventoryStatusReport;
use crate::sales::DailySalesReport;

/// Computes reports from the current store contents.
#[derive(Clone)]
pub struct ReportService<S: PosStore> {
    store: S,
    low_stock_threshold: u32,
}

impl<S: PosStore> ReportService<S> {
    /// Creates a report service using the default low-stock threshold.
    pub fn new(store: S) -> Self {
        Self {
            store,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }

    /// Overrides the low-stock threshold.
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Sales for the given UTC calendar day.
    #[tracing::instrument(skip(self))]
    pub async fn daily_sales(&self, date: NaiveDate) -> DailySalesReport {
        DailySalesReport::from(self.store.bills_on(date).await)
    }

    /// Sales for the current UTC day.
    pub async fn todays_sales(&self) -> DailySalesReport {
        self.daily_sales(Utc::now().date_naive()).await
    }

    /// Current low-stock and out-of-stock products.
    #[tracing::instrument(skip(self))]
    pub async fn inventory_status(&self) -> InventoryStatusReport {
        let products = self.store.list_products().await;
        InventoryStatusReport::from_products(&products, self.low_stock_threshold)
    }
}
