use std::collections::HashMap;

use rust_decimal::Decimal;

use super::currency_pair::CurrencyPair;
use crate::errors::{MoneyError, Result};
use crate::money::{Expression, Money};

/// Registry of exchange rates and the entry point for reducing expressions.
///
/// A rate `r` registered for `(from, to)` means `amount / r` in `to` is worth
/// `amount` in `from`. Identity pairs always have rate 1 and are never stored.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    /// Key: (From_Currency, To_Currency)
    rates: HashMap<CurrencyPair, Decimal>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or overwrites the rate for the ordered pair.
    ///
    /// Zero is rejected since reducing through it would divide by zero.
    pub fn add_rate(
        &mut self,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        rate: impl Into<Decimal>,
    ) -> Result<()> {
        let pair = CurrencyPair::new(from_currency, to_currency);
        let rate = rate.into();

        if rate.is_zero() {
            return Err(MoneyError::InvalidRate(format!("{} rate must not be zero", pair)));
        }
        if pair.is_identity() {
            log::debug!("Ignoring identity rate {} for {}", rate, pair);
            return Ok(());
        }

        log::debug!("Registering rate {} for {}", rate, pair);
        self.rates.insert(pair, rate);
        Ok(())
    }

    /// Looks up the rate for converting `from_currency` into `to_currency`.
    pub fn rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        self.rates
            .get(&CurrencyPair::new(from_currency, to_currency))
            .copied()
            .ok_or_else(|| MoneyError::missing_rate(from_currency, to_currency))
    }

    pub fn has_rate(&self, from_currency: &str, to_currency: &str) -> bool {
        self.rate(from_currency, to_currency).is_ok()
    }

    /// Reduces `source` to a single amount in `to_currency`.
    ///
    /// The tree walk lives in the expression; the bank only answers rate
    /// lookups.
    pub fn reduce(&self, source: &Expression, to_currency: &str) -> Result<Money> {
        source.reduce(self, to_currency)
    }

    /// Number of registered (non-identity) pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
