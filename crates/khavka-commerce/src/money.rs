//! Money type for representing monetary values.
//!
//! Uses an integer number of kopiykas (the hryvnia's minor unit) to avoid
//! the floating-point drift that plagues monetary arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    UAH,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "UAH").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::UAH => "UAH",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₴").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::UAH => "\u{20b4}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "UAH" => Some(Currency::UAH),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
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
/// Amounts are stored in the smallest unit of the currency (kopiykas for
/// UAH, cents for USD/EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest unit.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a hryvnia amount from kopiykas.
    pub const fn uah(amount_kop: i64) -> Self {
        Self::new(amount_kop, Currency::UAH)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use khavka_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(155.0, Currency::UAH);
    /// assert_eq!(price.amount_minor, 15500);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string with symbol (e.g., "₴155.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the bare amount (e.g., "155.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor + other.amount_minor,
            self.currency,
        ))
    }

    /// Multiply by a scalar quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor * factor, self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
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
    fn test_money_from_decimal() {
        let m = Money::from_decimal(155.0, Currency::UAH);
        assert_eq!(m.amount_minor, 15500);

        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_display() {
        let m = Money::uah(15500);
        assert_eq!(m.display_amount(), "155.00");
        assert_eq!(m.display(), "\u{20b4}155.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::uah(1000);
        let b = Money::uah(500);
        assert_eq!((a + b).amount_minor, 1500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::uah(15500);
        assert_eq!((m * 3).amount_minor, 46500);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::uah(100), Money::uah(250), Money::uah(50)];
        let total = Money::sum(values.iter(), Currency::UAH);
        assert_eq!(total.amount_minor, 400);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let uah = Money::uah(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(uah.try_add(&usd).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("uah"), Some(Currency::UAH));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
