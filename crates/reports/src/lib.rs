//! Read-only reports over the point-of-sale store.
//!
//! Reports own no state. Each one is computed on demand from a snapshot of
//! the ledger or the catalog:
//! - [`DailySalesReport`] — bill count and takings for one day
//! - [`InventoryStatusReport`] — low-stock and out-of-stock products

pub mod inventory;
pub mod sales;
pub mod service;

pub use inventory::InventoryStatusReport;
pub use sales::DailySalesReport;
pub use service::ReportService;
