use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered key of the rate table: converting `from` into `to`.
///
/// Equality and hashing cover both codes, so `(CHF, USD)` and `(USD, CHF)`
/// are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub from_currency: String,
    pub to_currency: String,
}

impl CurrencyPair {
    pub fn new(from_currency: impl Into<String>, to_currency: impl Into<String>) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.from_currency == self.to_currency
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from_currency, self.to_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(pair: &CurrencyPair) -> u64 {
        let mut hasher = DefaultHasher::new();
        pair.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_pair_equality_is_ordered() {
        let pair = CurrencyPair::new("CHF", "USD");
        assert_eq!(pair, CurrencyPair::new("CHF", "USD"));
        assert_ne!(pair, CurrencyPair::new("USD", "CHF"));
    }

    #[test]
    fn test_pair_hash_depends_on_both_codes() {
        let chf_usd = CurrencyPair::new("CHF", "USD");
        assert_eq!(hash_of(&chf_usd), hash_of(&CurrencyPair::new("CHF", "USD")));
        assert_ne!(hash_of(&chf_usd), hash_of(&CurrencyPair::new("USD", "CHF")));
        assert_ne!(hash_of(&chf_usd), hash_of(&CurrencyPair::new("EUR", "USD")));
    }

    #[test]
    fn test_pairs_occupy_distinct_set_entries() {
        let pairs: HashSet<CurrencyPair> = [
            CurrencyPair::new("CHF", "USD"),
            CurrencyPair::new("USD", "CHF"),
            CurrencyPair::new("EUR", "USD"),
            CurrencyPair::new("CHF", "USD"),
        ]
        .into_iter()
        .collect();
        assert_eq!(3, pairs.len());
    }

    #[test]
    fn test_display_and_identity() {
        assert_eq!("CHF/USD", CurrencyPair::new("CHF", "USD").to_string());
        assert!(CurrencyPair::new("USD", "USD").is_identity());
        assert!(!CurrencyPair::new("CHF", "USD").is_identity());
    }
}
