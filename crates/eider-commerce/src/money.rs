//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Serbian dinar, the storefront's native currency.
    #[default]
    RSD,
    EUR,
    USD,
    GBP,
    CHF,
}

impl Currency {
    /// Get the currency code (e.g., "RSD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RSD => "RSD",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
        }
    }

    /// Get the currency symbol (e.g., "din").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RSD => "din",
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
            Currency::CHF => "CHF",
        }
    }

    /// Get the number of decimal places for this currency.
    ///
    /// Dinar prices are quoted in whole dinars on the storefront.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::RSD => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RSD" => Some(Currency::RSD),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents
/// for EUR, whole dinars for RSD). This avoids floating-point precision
/// issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use eider_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::EUR);
    /// assert_eq!(price.amount, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let minor = (amount * multiplier as f64).round() as i64;
        Self::new(minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "41900 din").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        match self.currency {
            Currency::RSD => format!("{:.places$} {}", decimal, self.currency.symbol()),
            _ => format!("{}{:.places$}", self.currency.symbol(), decimal),
        }
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    /// Panics on overflow. Use `try_multiply` for fallible multiplication.
    pub fn multiply(&self, factor: i64) -> Money {
        self.try_multiply(factor)
            .expect("Overflow in money multiplication")
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a decimal factor (e.g., for fabric multipliers).
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let amount = (self.amount as f64 * factor).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values, returning None on currency
    /// mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(41900, Currency::RSD);
        assert_eq!(m.amount, 41900);
        assert_eq!(m.currency, Currency::RSD);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::EUR);
        assert_eq!(m.amount, 4999);

        let m = Money::from_decimal(41900.0, Currency::RSD);
        assert_eq!(m.amount, 41900); // RSD has no decimals
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(41900, Currency::RSD);
        assert_eq!(m.display(), "41900 din");

        let m = Money::new(4999, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(41900, Currency::RSD);
        let b = Money::new(720, Currency::RSD);
        let c = a + b;
        assert_eq!(c.amount, 42620);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(41900, Currency::RSD);
        let b = Money::new(4190, Currency::RSD);
        let c = a.subtract(&b);
        assert_eq!(c.amount, 37710);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::RSD);
        let tripled = m.multiply(3);
        assert_eq!(tripled.amount, 3000);
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::RSD);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(41900, Currency::RSD);
        let discount = m.percentage(10.0);
        assert_eq!(discount.amount, 4190);
    }

    #[test]
    fn test_money_try_sum() {
        let values = vec![
            Money::new(1000, Currency::RSD),
            Money::new(2500, Currency::RSD),
        ];
        let total = Money::try_sum(values.iter(), Currency::RSD).unwrap();
        assert_eq!(total.amount, 3500);
    }

    #[test]
    fn test_money_try_sum_mixed_currency() {
        let values = vec![
            Money::new(1000, Currency::RSD),
            Money::new(1000, Currency::EUR),
        ];
        assert!(Money::try_sum(values.iter(), Currency::RSD).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let rsd = Money::new(1000, Currency::RSD);
        let eur = Money::new(1000, Currency::EUR);
        let _ = rsd + eur;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("RSD"), Some(Currency::RSD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
