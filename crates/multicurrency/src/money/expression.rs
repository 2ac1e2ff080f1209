//! Expression tree over `Money` values.

use serde::{Deserialize, Serialize};

use super::money_model::Money;
use crate::bank::Bank;
use crate::errors::{MoneyError, Result};

/// An unevaluated monetary value.
///
/// The set of variants is closed: every operation matches on both, so a new
/// variant cannot be added without handling it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expression {
    Money(Money),
    Sum(Box<Sum>),
}

impl Expression {
    /// Scales the expression. Multiplication distributes over a `Sum`.
    pub fn times(&self, multiplier: i64) -> Result<Expression> {
        match self {
            Expression::Money(money) => Ok(money.times(multiplier)?.into()),
            Expression::Sum(sum) => Ok(sum.times(multiplier)?.into()),
        }
    }

    /// Defers the addition into a `Sum`, whatever the variant.
    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        Sum::new(self.clone(), addend).into()
    }

    /// Evaluates the tree down to a single `Money` in `to_currency`.
    pub fn reduce(&self, bank: &Bank, to_currency: &str) -> Result<Money> {
        match self {
            Expression::Money(money) => money.reduce(bank, to_currency),
            Expression::Sum(sum) => sum.reduce(bank, to_currency),
        }
    }

    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Expression::Money(money) => Some(money),
            Expression::Sum(_) => None,
        }
    }

    pub fn as_sum(&self) -> Option<&Sum> {
        match self {
            Expression::Money(_) => None,
            Expression::Sum(sum) => Some(sum),
        }
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Expression::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Expression::Sum(Box::new(sum))
    }
}

/// A deferred addition of two expressions, possibly in different currencies.
///
/// A `Sum` carries no currency of its own; one is chosen only when it is
/// reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sum {
    pub augend: Expression,
    pub addend: Expression,
}

impl Sum {
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self {
            augend: augend.into(),
            addend: addend.into(),
        }
    }

    /// Scales both sides independently.
    pub fn times(&self, multiplier: i64) -> Result<Sum> {
        Ok(Sum {
            augend: self.augend.times(multiplier)?,
            addend: self.addend.times(multiplier)?,
        })
    }

    pub fn plus(&self, addend: impl Into<Expression>) -> Expression {
        Sum::new(self.clone(), addend).into()
    }

    /// Reduces both sides to `to_currency` and adds the resulting amounts.
    pub fn reduce(&self, bank: &Bank, to_currency: &str) -> Result<Money> {
        let augend = self.augend.reduce(bank, to_currency)?;
        let addend = self.addend.reduce(bank, to_currency)?;
        let amount = augend
            .amount()
            .checked_add(addend.amount())
            .ok_or_else(|| MoneyError::Overflow(format!("{} + {}", augend, addend)))?;
        Ok(Money::new(amount, to_currency))
    }
}
