//! Bank module - exchange rate table and the reduction entry point.

mod bank_model;
mod currency_pair;
mod shared_bank;

pub use bank_model::Bank;
pub use currency_pair::CurrencyPair;
pub use shared_bank::SharedBank;
