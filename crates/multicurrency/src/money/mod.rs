//! Money module - amounts, deferred sums, and the expression tree joining them.

mod expression;
mod money_model;

pub use expression::{Expression, Sum};
pub use money_model::Money;
