use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn is_positive(&self) -> bool {
        *self > Money::ZERO
    }

    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// `self * rate / 100`, `None` on overflow.
    pub fn checked_percent(&self, rate: Decimal) -> Option<Money> {
        self.0
            .checked_mul(rate)?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s)
            .map(Money)
            .map_err(|_| Error::Input(format!("{:?} is not an amount", s)))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // transaction records ask for a fixed precision, console output doesn't
        match f.precision() {
            Some(places) => write!(f, "{:.*}", places, self.0),
            None => write!(f, "{}", self.0.normalize()),
        }
    }
}
