//! Bill requests, priced bills and ledger records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::{BillNumber, CustomerId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::money::{Money, TaxRate};
use crate::product::Product;

/// Goods and services tax applied to every bill subtotal (18%).
pub const GST_RATE: TaxRate = TaxRate::from_basis_points(1800);

/// One requested line of a bill: which product and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl BillItem {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A request to bill a list of items, optionally for a known customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRequest {
    pub items: Vec<BillItem>,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

impl BillRequest {
    /// Creates an anonymous bill request.
    pub fn new(items: Vec<BillItem>) -> Self {
        Self {
            items,
            customer_id: None,
        }
    }

    /// Attaches a customer to the request.
    pub fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

/// A priced line, capturing the product as it was at the time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl BillLine {
    fn for_product(product: &Product, quantity: u32) -> Result<Self> {
        let line_total = product
            .price
            .checked_multiply(quantity)
            .ok_or(DomainError::AmountOverflow {
                product_id: product.id,
            })?;
        Ok(Self {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            line_total,
        })
    }
}

/// A fully validated and priced bill that has not been numbered yet.
///
/// Holds the stock level each product will have once the bill is committed,
/// so the caller can apply every decrement at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedBill {
    pub lines: Vec<BillLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
    remaining_stock: BTreeMap<ProductId, u32>,
}

impl PricedBill {
    /// Stock levels after this bill, one entry per distinct product.
    pub fn remaining_stock(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.remaining_stock.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Turns the priced bill into an immutable ledger record.
    pub fn into_bill(
        self,
        bill_number: BillNumber,
        customer_id: Option<CustomerId>,
        created_at: DateTime<Utc>,
    ) -> Bill {
        Bill {
            bill_number,
            customer_id,
            items: self.lines,
            subtotal: self.subtotal,
            tax: self.tax,
            grand_total: self.grand_total,
            created_at,
        }
    }
}

/// A completed bill as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub bill_number: BillNumber,
    pub customer_id: Option<CustomerId>,
    pub items: Vec<BillLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
    pub created_at: DateTime<Utc>,
}

/// Prices `items` against the catalog reachable through `lookup`.
///
/// Items are checked in order and the first failure is returned. Quantities
/// for the same product are summed before comparing against stock. Nothing is
/// mutated; the returned [`PricedBill`] carries the stock levels to write back.
pub fn price_bill<'a, F>(items: &[BillItem], tax_rate: TaxRate, mut lookup: F) -> Result<PricedBill>
where
    F: FnMut(ProductId) -> Option<&'a Product>,
{
    if items.is_empty() {
        return Err(DomainError::EmptyBill);
    }

    let mut requested: BTreeMap<ProductId, u32> = BTreeMap::new();
    let mut remaining_stock = BTreeMap::new();
    let mut lines = Vec::with_capacity(items.len());
    let mut subtotal = Money::zero();

    for item in items {
        if item.quantity == 0 {
            return Err(DomainError::InvalidQuantity {
                product_id: item.product_id,
            });
        }

        let product =
            lookup(item.product_id).ok_or(DomainError::ProductNotFound(item.product_id))?;

        let total_requested = requested.entry(product.id).or_insert(0);
        *total_requested = total_requested.saturating_add(item.quantity);
        if *total_requested > product.quantity {
            return Err(DomainError::InsufficientStock {
                product: product.name.clone(),
                available: product.quantity,
                requested: *total_requested,
            });
        }
        remaining_stock.insert(product.id, product.quantity - *total_requested);

        let line = BillLine::for_product(product, item.quantity)?;
        subtotal = subtotal
            .checked_add(line.line_total)
            .ok_or(DomainError::AmountOverflow {
                product_id: product.id,
            })?;
        lines.push(line);
    }

    let tax = tax_rate.apply(subtotal);
    let grand_total = subtotal.checked_add(tax).ok_or(DomainError::AmountOverflow {
        product_id: items[items.len() - 1].product_id,
    })?;

    Ok(PricedBill {
        lines,
        subtotal,
        tax,
        grand_total,
        remaining_stock,
    })
}
