//! Catalog product records.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::money::Money;

/// Products with fewer units than this on hand are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned identifier, unique within the catalog.
    pub id: ProductId,

    pub name: String,

    pub barcode: Option<String>,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub quantity: u32,

    pub category: Option<String>,
}

impl Product {
    /// Creates a product with no barcode or category.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            barcode: None,
            price,
            quantity,
            category: None,
        }
    }

    /// Sets the barcode.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Checks the record before it is stored.
    ///
    /// Quantities are unsigned, so only the price needs checking.
    pub fn validate(&self) -> Result<()> {
        if self.price.is_negative() {
            return Err(DomainError::InvalidProduct(format!(
                "price for product {} must not be negative, got {}",
                self.id, self.price
            )));
        }
        Ok(())
    }

    /// Returns true if no units are on hand.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Returns true if fewer than `threshold` units are on hand.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }
}
