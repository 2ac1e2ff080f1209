//! Multicurrency money arithmetic.
//!
//! Amounts in different currencies are combined into an [`Expression`] tree
//! with `plus` and `times`. Nothing is converted until the tree is reduced
//! through a [`Bank`], which owns the exchange rates:
//!
//! ```text
//! Bank::reduce(expr, to) → Expression::reduce(bank, to) → Bank::rate(from, to)
//! ```
//!
//! - **Money** (`money/money_model.rs`) - an amount in a single currency
//! - **Expression** (`money/expression.rs`) - `Money` or a deferred `Sum`
//! - **Bank** (`bank/bank_model.rs`) - the rate table and reduction entry point
//! - **SharedBank** (`bank/shared_bank.rs`) - a lock-guarded bank for sharing across threads

pub mod bank;
pub mod constants;
pub mod errors;
pub mod money;

pub use bank::{Bank, CurrencyPair, SharedBank};
pub use errors::{MoneyError, Result};
pub use money::{Expression, Money, Sum};
