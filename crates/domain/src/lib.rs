//! Domain layer for the point-of-sale back end.
//!
//! This crate holds the pure business rules, with no I/O and no shared state:
//! - [`Money`] amounts in integer cents and the flat [`TaxRate`]
//! - [`Product`] and [`Customer`] records with their validation rules
//! - Bill requests, priced bills and the [`price_bill`] function that checks
//!   a request against current stock

pub mod bill;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;

pub use bill::{Bill, BillItem, BillLine, BillRequest, GST_RATE, PricedBill, price_bill};
pub use common::{BillNumber, CustomerId, ProductId};
pub use customer::Customer;
pub use error::{DomainError, ErrorKind, Result};
pub use money::{Money, TaxRate};
pub use product::{LOW_STOCK_THRESHOLD, Product};
