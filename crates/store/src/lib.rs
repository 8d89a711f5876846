//! State container for the point-of-sale back end.
//!
//! - [`PosStore`] is the trait handlers program against
//! - [`InMemoryStore`] keeps the catalog, customer directory and [`Ledger`]
//!   behind a single lock, so every bill is priced, checked and committed
//!   atomically

pub mod ledger;
pub mod memory;
pub mod store;

pub use common::{BillNumber, CustomerId, ProductId};
pub use domain::{DomainError, Result};
pub use ledger::{Ledger, LedgerDay};
pub use memory::InMemoryStore;
pub use store::PosStore;
