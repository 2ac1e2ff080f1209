use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

use super::bank_model::Bank;
use crate::errors::Result;
use crate::money::{Expression, Money};

/// A `Bank` that can be shared between threads.
///
/// Writers (`add_rate`) take the write lock; lookups and reductions take the
/// read lock, so reductions never observe a half-updated table. Clones share
/// the same table.
#[derive(Debug, Clone, Default)]
pub struct SharedBank {
    inner: Arc<RwLock<Bank>>,
}

impl SharedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rate(
        &self,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        rate: impl Into<Decimal>,
    ) -> Result<()> {
        let mut bank = self.inner.write()?;
        bank.add_rate(from_currency, to_currency, rate)
    }

    pub fn rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        let bank = self.inner.read()?;
        bank.rate(from_currency, to_currency)
    }

    pub fn reduce(&self, source: &Expression, to_currency: &str) -> Result<Money> {
        let bank = self.inner.read()?;
        bank.reduce(source, to_currency)
    }

    /// Copies the current rate table out of the lock.
    pub fn snapshot(&self) -> Result<Bank> {
        let bank = self.inner.read()?;
        Ok(bank.clone())
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bank)),
        }
    }
}
