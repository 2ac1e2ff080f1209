//! Money domain model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::expression::{Expression, Sum};
use crate::bank::Bank;
use crate::constants::{CHF, USD};
use crate::errors::{MoneyError, Result};

/// An amount in a single currency.
///
/// Money is a value: the amount and currency are fixed at construction and
/// every operation returns a new instance. Two values are equal when both
/// the amount and the currency are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: impl Into<Decimal>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// Creates an amount in US dollars.
    pub fn dollar(amount: impl Into<Decimal>) -> Self {
        Self::new(amount, USD)
    }

    /// Creates an amount in Swiss francs.
    pub fn franc(amount: impl Into<Decimal>) -> Self {
        Self::new(amount, CHF)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Scales the amount, keeping the currency.
    pub fn times(&self, multiplier: i64) -> Result<Money> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(multiplier))
            .ok_or_else(|| MoneyError::Overflow(format!("{} * {}", self, multiplier)))?;
        Ok(Money::new(amount, self.currency.clone()))
    }

    /// Defers the addition into a `Sum`; nothing is converted here.
    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        Sum::new(self.clone(), addend).into()
    }

    /// Converts this amount into `to_currency` using the bank's rate.
    ///
    /// The result is the exact decimal quotient `amount / rate`.
    pub fn reduce(&self, bank: &Bank, to_currency: &str) -> Result<Money> {
        let rate = bank.rate(&self.currency, to_currency)?;
        let amount = self.amount.checked_div(rate).ok_or_else(|| {
            MoneyError::Overflow(format!("{} / {} ({})", self.amount, rate, to_currency))
        })?;
        log::trace!("Reduced {} to {} {}", self, amount, to_currency);
        Ok(Money::new(amount, to_currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equality() {
        assert_eq!(Money::dollar(5), Money::dollar(5));
        assert_ne!(Money::dollar(5), Money::dollar(6));
        assert_ne!(Money::franc(5), Money::dollar(5));
    }

    #[test]
    fn test_equality_ignores_decimal_scale() {
        assert_eq!(Money::dollar(dec!(5.00)), Money::dollar(5));
    }

    #[test]
    fn test_multiplication() {
        let five = Money::dollar(5);
        assert_eq!(Money::dollar(10), five.times(2).unwrap());
        assert_eq!(Money::dollar(15), five.times(3).unwrap());
    }

    #[test]
    fn test_multiplication_by_zero_and_negative() {
        let five = Money::franc(5);
        assert_eq!(Money::franc(0), five.times(0).unwrap());
        assert_eq!(Money::franc(-10), five.times(-2).unwrap());
    }

    #[test]
    fn test_multiplication_overflow_is_an_error() {
        let err = Money::dollar(Decimal::MAX).times(2).unwrap_err();
        assert!(matches!(err, MoneyError::Overflow(_)));
        assert_eq!(
            Money::dollar(Decimal::MAX),
            Money::dollar(Decimal::MAX).times(1).unwrap()
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!("USD", Money::dollar(1).currency());
        assert_eq!("CHF", Money::franc(1).currency());
    }

    #[test]
    fn test_plus_returns_sum() {
        let five = Money::dollar(5);
        let result = five.plus(five.clone());
        let sum = result.as_sum().expect("plus should defer into a Sum");
        assert_eq!(Some(&five), sum.augend.as_money());
        assert_eq!(Some(&five), sum.addend.as_money());
    }

    #[test]
    fn test_reduce_same_currency() {
        let bank = Bank::new();
        let result = Money::dollar(1).reduce(&bank, "USD").unwrap();
        assert_eq!(Money::dollar(1), result);
    }

    #[test]
    fn test_reduce_keeps_exact_quotient() {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", dec!(2)).unwrap();
        let result = Money::franc(3).reduce(&bank, "USD").unwrap();
        assert_eq!(Money::dollar(dec!(1.5)), result);
    }

    #[test]
    fn test_reduce_missing_rate() {
        let bank = Bank::new();
        let err = Money::franc(2).reduce(&bank, "USD").unwrap_err();
        assert_eq!(err, MoneyError::missing_rate("CHF", "USD"));
    }

    #[test]
    fn test_display() {
        assert_eq!("5 USD", Money::dollar(5).to_string());
        assert_eq!("1.5 CHF", Money::franc(dec!(1.5)).to_string());
    }

    #[test]
    fn test_json_round_trip() {
        let money = Money::franc(dec!(12.5));
        let json = serde_json::to_string(&money).unwrap();
        assert!(json.contains("\"currency\":\"CHF\""));
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(money, back);
    }

    #[test]
    fn test_json_keeps_full_precision() {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", 3).unwrap();
        let third = Money::franc(1).reduce(&bank, "USD").unwrap();
        let large = Money::dollar(123_456_789_012_345_678i64);

        for money in [third, large] {
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(money.amount(), back.amount());
            assert_eq!(money, back);
        }
    }

    #[test]
    fn test_json_amount_is_a_string() {
        let json = serde_json::to_value(Money::dollar(dec!(0.1))).unwrap();
        assert_eq!(json["amount"], "0.1");
    }
}
