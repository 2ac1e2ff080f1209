/// ISO code used by `Money::dollar`
pub const USD: &str = "USD";

/// ISO code used by `Money::franc`
pub const CHF: &str = "CHF";
