use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use common::{BillNumber, CustomerId, ProductId};
use domain::{
    Bill, BillRequest, Customer, DomainError, GST_RATE, Product, Result, TaxRate, price_bill,
};
use tokio::sync::RwLock;

use crate::ledger::{Ledger, LedgerDay};
use crate::store::PosStore;

/// Everything the store owns, guarded by one lock.
#[derive(Debug, Default)]
struct StoreState {
    products: BTreeMap<ProductId, Product>,
    customers: BTreeMap<CustomerId, Customer>,
    ledger: Ledger,
    /// Number of the last bill issued; zero before the first bill.
    bill_counter: u64,
}

impl StoreState {
    fn create_bill(
        &mut self,
        request: BillRequest,
        tax_rate: TaxRate,
        created_at: DateTime<Utc>,
    ) -> Result<Bill> {
        if let Some(customer_id) = request.customer_id
            && !self.customers.contains_key(&customer_id)
        {
            return Err(DomainError::CustomerNotFound(customer_id));
        }

        let priced = price_bill(&request.items, tax_rate, |id| self.products.get(&id))?;

        for (id, remaining) in priced.remaining_stock() {
            if let Some(product) = self.products.get_mut(&id) {
                product.quantity = remaining;
            }
        }

        self.bill_counter += 1;
        let bill = priced.into_bill(
            BillNumber::new(self.bill_counter),
            request.customer_id,
            created_at,
        );
        self.ledger.append(bill.clone());
        Ok(bill)
    }
}

/// In-memory implementation of [`PosStore`].
///
/// All state lives behind a single `RwLock`; reads share it and every
/// mutation takes it exclusively. Clones share the same state.
#[derive(Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    tax_rate: TaxRate,
}

impl InMemoryStore {
    /// Creates an empty store that charges GST on every bill.
    pub fn new() -> Self {
        Self::with_tax_rate(GST_RATE)
    }

    /// Creates an empty store with a custom tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            tax_rate,
        }
    }

    /// Returns the tax rate applied to bills.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Returns the number of products in the catalog.
    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }

    /// Returns the number of bills in the ledger.
    pub async fn bill_count(&self) -> usize {
        self.state.read().await.ledger.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PosStore for InMemoryStore {
    async fn list_products(&self) -> Vec<Product> {
        self.state.read().await.products.values().cloned().collect()
    }

    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    async fn add_product(&self, product: Product) -> Result<Product> {
        product.validate()?;

        let mut state = self.state.write().await;
        if state.products.contains_key(&product.id) {
            return Err(DomainError::DuplicateProduct(product.id));
        }
        state.products.insert(product.id, product.clone());

        metrics::counter!("products_added_total").increment(1);
        tracing::debug!(name = %product.name, "product added");
        Ok(product)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.state
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(DomainError::ProductNotFound(id))
    }

    #[tracing::instrument(skip(self, product))]
    async fn update_product(&self, id: ProductId, mut product: Product) -> Result<Product> {
        product.id = id;
        product.validate()?;

        let mut state = self.state.write().await;
        let stored = state
            .products
            .get_mut(&id)
            .ok_or(DomainError::ProductNotFound(id))?;
        *stored = product.clone();

        tracing::debug!("product updated");
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<Product> {
        let removed = self
            .state
            .write()
            .await
            .products
            .remove(&id)
            .ok_or(DomainError::ProductNotFound(id))?;

        tracing::debug!("product deleted");
        Ok(removed)
    }

    async fn list_customers(&self) -> Vec<Customer> {
        self.state.read().await.customers.values().cloned().collect()
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id))]
    async fn add_customer(&self, customer: Customer) -> Result<Customer> {
        let mut state = self.state.write().await;
        if state.customers.contains_key(&customer.id) {
            return Err(DomainError::DuplicateCustomer(customer.id));
        }
        state.customers.insert(customer.id, customer.clone());

        metrics::counter!("customers_added_total").increment(1);
        Ok(customer)
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.state
            .read()
            .await
            .customers
            .get(&id)
            .cloned()
            .ok_or(DomainError::CustomerNotFound(id))
    }

    #[tracing::instrument(skip(self, request), fields(items = request.items.len()))]
    async fn create_bill(&self, request: BillRequest) -> Result<Bill> {
        let result = self
            .state
            .write()
            .await
            .create_bill(request, self.tax_rate, Utc::now());

        match &result {
            Ok(bill) => {
                metrics::counter!("bills_created_total").increment(1);
                metrics::histogram!("bill_grand_total_cents")
                    .record(bill.grand_total.cents() as f64);
                tracing::info!(
                    bill_number = %bill.bill_number,
                    grand_total = %bill.grand_total,
                    "bill created"
                );
            }
            Err(e) => {
                metrics::counter!("bills_rejected_total").increment(1);
                tracing::warn!(error = %e, "bill rejected");
            }
        }

        result
    }

    async fn list_bills(&self) -> Vec<Bill> {
        self.state.read().await.ledger.all().to_vec()
    }

    async fn bills_on(&self, date: NaiveDate) -> LedgerDay {
        self.state.read().await.ledger.on_date(date)
    }
}
