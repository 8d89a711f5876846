//! Domain error types.

use common::{CustomerId, ProductId};
use thiserror::Error;

/// Errors raised by catalog, directory and billing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A product with this ID is already in the catalog.
    #[error("Product ID {0} already exists")]
    DuplicateProduct(ProductId),

    /// A customer with this ID is already in the directory.
    #[error("Customer ID {0} already exists")]
    DuplicateCustomer(CustomerId),

    /// No product with this ID exists.
    #[error("Product ID {0} not found")]
    ProductNotFound(ProductId),

    /// No customer with this ID exists.
    #[error("Customer ID {0} not found")]
    CustomerNotFound(CustomerId),

    /// A bill asked for more units than are on hand.
    #[error(
        "Insufficient quantity for product {product}: available {available}, requested {requested}"
    )]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },

    /// A product record failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// A bill line asked for zero units.
    #[error("Quantity for product {product_id} must be positive")]
    InvalidQuantity { product_id: ProductId },

    /// A bill request contained no items.
    #[error("Bill must contain at least one item")]
    EmptyBill,

    /// A line or bill total does not fit in the money representation.
    #[error("Bill total for product {product_id} exceeds the maximum amount")]
    AmountOverflow { product_id: ProductId },
}

/// Coarse classification of [`DomainError`] used when reporting to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InsufficientStock,
    Validation,
}

impl DomainError {
    /// Returns the kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::DuplicateProduct(_) | DomainError::DuplicateCustomer(_) => {
                ErrorKind::DuplicateKey
            }
            DomainError::ProductNotFound(_) | DomainError::CustomerNotFound(_) => {
                ErrorKind::NotFound
            }
            DomainError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            DomainError::InvalidProduct(_)
            | DomainError::InvalidQuantity { .. }
            | DomainError::EmptyBill
            | DomainError::AmountOverflow { .. } => ErrorKind::Validation,
        }
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
