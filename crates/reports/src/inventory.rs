//! Stock level report.

use domain::Product;
use serde::Serialize;

/// Catalog products that need restocking.
///
/// An out-of-stock product also has fewer units than any positive
/// threshold, so it shows up in both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryStatusReport {
    pub low_stock_threshold: u32,
    pub low_stock: Vec<Product>,
    pub out_of_stock: Vec<Product>,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventoryStatusReport {
    /// Partitions `products` by stock level.
    pub fn from_products(products: &[Product], low_stock_threshold: u32) -> Self {
        let low_stock: Vec<Product> = products
            .iter()
            .filter(|p| p.is_low_stock(low_stock_threshold))
            .cloned()
            .collect();
        let out_of_stock: Vec<Product> = products
            .iter()
            .filter(|p| p.is_out_of_stock())
            .cloned()
            .collect();

        Self {
            low_stock_threshold,
            low_stock_count: low_stock.len(),
            out_of_stock_count: out_of_stock.len(),
            low_stock,
            out_of_stock,
        }
    }
}
