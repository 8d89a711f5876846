use async_trait::async_trait;
use chrono::NaiveDate;
use common::{CustomerId, ProductId};
use domain::{Bill, BillRequest, Customer, Product, Result};

use crate::LedgerDay;

/// Core trait for point-of-sale state.
///
/// Implementations must be thread-safe (Send + Sync) and must make every
/// mutating call atomic with respect to the others.
#[async_trait]
pub trait PosStore: Send + Sync {
    /// Returns every product in the catalog, ordered by ID.
    async fn list_products(&self) -> Vec<Product>;

    /// Adds a new product.
    ///
    /// Fails with `DuplicateProduct` if the ID is taken and leaves the
    /// catalog unchanged.
    async fn add_product(&self, product: Product) -> Result<Product>;

    /// Fetches a product by ID.
    async fn get_product(&self, id: ProductId) -> Result<Product>;

    /// Replaces every field of an existing product except its ID.
    async fn update_product(&self, id: ProductId, product: Product) -> Result<Product>;

    /// Removes a product and returns the removed record.
    async fn delete_product(&self, id: ProductId) -> Result<Product>;

    /// Returns every customer, ordered by ID.
    async fn list_customers(&self) -> Vec<Customer>;

    /// Adds a new customer. Fails with `DuplicateCustomer` if the ID is taken.
    async fn add_customer(&self, customer: Customer) -> Result<Customer>;

    /// Fetches a customer by ID.
    async fn get_customer(&self, id: CustomerId) -> Result<Customer>;

    /// Prices a bill, decrements stock and appends it to the ledger.
    ///
    /// Either the whole request succeeds or nothing changes: a failure on any
    /// item leaves every stock level and the bill counter untouched.
    async fn create_bill(&self, request: BillRequest) -> Result<Bill>;

    /// Returns every bill in the order it was created.
    async fn list_bills(&self) -> Vec<Bill>;

    /// Returns the bills created on `date` (UTC) with their count and total.
    async fn bills_on(&self, date: NaiveDate) -> LedgerDay;
}
