//! Shared identifier types for the point-of-sale crates.

pub mod types;

pub use types::{BillNumber, CustomerId, ProductId};
