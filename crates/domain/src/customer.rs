//! Customer directory records.

use common::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub loyalty_points: u32,
}

impl Customer {
    /// Creates a customer with no phone number and zero loyalty points.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: None,
            loyalty_points: 0,
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loyalty_points_default_to_zero() {
        let customer: Customer = serde_json::from_str(r#"{"id": 1, "name": "Asha"}"#).unwrap();
        assert_eq!(customer, Customer::new(CustomerId::new(1), "Asha"));
        assert_eq!(customer.loyalty_points, 0);
    }

    #[test]
    fn phone_is_kept() {
        let customer = Customer::new(CustomerId::new(2), "Ravi").with_phone("+91 98765 43210");
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["phone"], "+91 98765 43210");
    }
}
