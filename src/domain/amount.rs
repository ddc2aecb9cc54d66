//! Raw token amount with checked arithmetic.

use core::fmt;

use super::Rounding;
use crate::math::div_rounded;

/// A raw token amount in the smallest unit of its token.
///
/// `Amount` never interprets decimals. All `u64` values are valid amounts,
/// matching the width of on-ledger token balances.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking. Products are formed
/// in `u128` so that `a · b / d` never loses the intermediate.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.checked_mul_div(50, 100, Rounding::Down), Some(Amount::new(50)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value widened to `u128`.
    #[must_use]
    pub const fn wide(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if the amount is zero.
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

    /// Computes `self · numerator / denominator` with a `u128` intermediate.
    ///
    /// Returns `None` if the denominator is zero, the intermediate product
    /// overflows `u128`, or the quotient does not fit back into `u64`.
    #[must_use]
    pub const fn checked_mul_div(
        &self,
        numerator: u64,
        denominator: u64,
        rounding: Rounding,
    ) -> Option<Self> {
        let product = (self.0 as u128) * (numerator as u128);
        match div_rounded(product, denominator as u128, rounding) {
            Some(q) if q <= u64::MAX as u128 => Some(Self(q as u64)),
            _ => None,
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
