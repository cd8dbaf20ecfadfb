//! Decimal money value, used for outstanding balances
//!
//! Monetary amounts are never floats. `Money` wraps a `rust_decimal::Decimal`
//! and exposes only the predicates the status rules need.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero. An outstanding amount that went negative
    /// (over-payment) is neither zero nor positive and classifies as settled
    /// by the zero rule only when it is exactly zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero_and_not_positive() {
        let m = Money::zero();
        assert!(m.is_zero());
        assert!(!m.is_positive());
    }

    #[test]
    fn parsed_amount_is_positive() {
        let m: Money = "1250.50".parse().unwrap();
        assert!(!m.is_zero());
        assert!(m.is_positive());
    }

    #[test]
    fn negative_amount_is_neither() {
        let m: Money = "-3.10".parse().unwrap();
        assert!(!m.is_zero());
        assert!(!m.is_positive());
    }
}
