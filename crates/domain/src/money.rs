//! Money and tax rate value objects.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Money amount represented in cents to avoid floating point drift.
///
/// On the wire an amount is a plain decimal number (`10.5`, `118.0`). Incoming
/// values are rounded to the nearest cent, halves away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a Money amount from a decimal value such as `12.99`.
    ///
    /// Returns `None` for NaN, infinities and values that do not fit in cents.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self {
            cents: cents as i64,
        })
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-unit portion.
    pub fn units(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after whole units).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns the amount as a decimal value.
    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity, or `None` if the result does not fit in cents.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Adds two amounts, or `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Adds two amounts, clamping at the representable bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

/// Sums clamp at the representable bounds instead of overflowing.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount)
            .ok_or_else(|| de::Error::custom(format!("invalid money amount: {amount}")))
    }
}

/// A flat percentage rate expressed in basis points (1% = 100 bps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxRate {
    basis_points: u32,
}

impl TaxRate {
    /// Creates a rate from basis points, e.g. `1800` for 18%.
    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self { basis_points }
    }

    /// Returns the rate in basis points.
    pub fn basis_points(&self) -> u32 {
        self.basis_points
    }

    /// Computes the tax on `amount`, rounded half up to the nearest cent.
    pub fn apply(&self, amount: Money) -> Money {
        let scaled = i128::from(amount.cents()) * i128::from(self.basis_points);
        let magnitude = (scaled.abs() + 5_000) / 10_000;
        let cents = if scaled < 0 { -magnitude } else { magnitude };
        Money::from_cents(cents as i64)
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}%",
            self.basis_points / 100,
            self.basis_points % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(12.99).unwrap().cents(), 1299);
        assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_decimal(-1.5).unwrap().cents(), -150);
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_cents(11800).to_string(), "118.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn multiply_and_sum() {
        let price = Money::from_cents(250);
        assert_eq!(price.checked_multiply(4), Some(Money::from_cents(1000)));
        let total: Money = vec![Money::from_cents(100), Money::from_cents(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(125));
    }

    #[test]
    fn arithmetic_detects_overflow() {
        let huge = Money::from_decimal(1e16).unwrap();
        assert!(huge.checked_multiply(10).is_none());
        assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());

        let total: Money = vec![Money::from_cents(i64::MAX), Money::from_cents(5)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn serializes_as_decimal_number() {
        let json = serde_json::to_value(Money::from_cents(1050)).unwrap();
        assert_eq!(json, serde_json::json!(10.5));

        let parsed: Money = serde_json::from_str("99").unwrap();
        assert_eq!(parsed.cents(), 9900);
        let parsed: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(parsed.cents(), 10);
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(serde_json::from_str::<Money>("\"ten\"").is_err());
    }

    #[test]
    fn eighteen_percent_of_one_hundred() {
        let rate = TaxRate::from_basis_points(1800);
        assert_eq!(rate.apply(Money::from_cents(10_000)), Money::from_cents(1800));
    }

    #[test]
    fn tax_rounds_half_up() {
        let rate = TaxRate::from_basis_points(1800);
        // 0.25 * 0.18 = 0.045
        assert_eq!(rate.apply(Money::from_cents(25)), Money::from_cents(5));
        // 0.20 * 0.18 = 0.036
        assert_eq!(rate.apply(Money::from_cents(20)), Money::from_cents(4));
        // 0.02 * 0.18 = 0.0036
        assert_eq!(rate.apply(Money::from_cents(2)), Money::zero());
    }

    #[test]
    fn tax_rate_display() {
        assert_eq!(TaxRate::from_basis_points(1800).to_string(), "18.00%");
        assert_eq!(TaxRate::from_basis_points(725).to_string(), "7.25%");
    }
}
