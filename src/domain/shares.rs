//! Liquidity-share units.

use core::fmt;

use super::Amount;

/// Units of a pool's liquidity-share token.
///
/// This is distinct from [`Amount`] because it measures a proportional
/// claim on both reserves, not a balance of one token. All `u64` values are
/// valid share counts.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u64);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Reinterprets the share count as a raw token amount of the share token.
    ///
    /// Used when the share token is moved through custody like any other
    /// token.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl From<Amount> for Shares {
    fn from(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Shares::new(42).get(), 42);
    }

    #[test]
    fn zero() {
        assert!(Shares::ZERO.is_zero());
        assert!(!Shares::new(1).is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
    }

    #[test]
    fn add_and_sub() {
        assert_eq!(Shares::new(5).checked_add(&Shares::new(7)), Some(Shares::new(12)));
        assert_eq!(Shares::new(u64::MAX).checked_add(&Shares::new(1)), None);
        assert_eq!(Shares::new(7).checked_sub(&Shares::new(5)), Some(Shares::new(2)));
        assert_eq!(Shares::new(5).checked_sub(&Shares::new(7)), None);
    }

    #[test]
    fn amount_conversion() {
        assert_eq!(Shares::new(9).as_amount(), Amount::new(9));
        assert_eq!(Shares::from(Amount::new(9)), Shares::new(9));
    }

    #[test]
    fn display() {
        assert_eq!(Shares::new(200).to_string(), "200");
    }
}
