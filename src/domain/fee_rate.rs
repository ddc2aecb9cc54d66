//! Swap fee expressed as the retained fraction of the input.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// The fraction of a swap input that is priced, as `numerator / denominator`.
///
/// A rate of `997 / 1000` prices 99.7% of the input and keeps the remaining
/// 0.3% inside the pool as a gain for liquidity providers. The rate is kept
/// as an integer ratio so that the pricing formula
///
/// ```text
/// amount_out = ⌊amount_in·n · reserve_out / (reserve_in·d + amount_in·n)⌋
/// ```
///
/// stays exact.
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeRate;
///
/// let rate = FeeRate::STANDARD;
/// assert_eq!(rate.numerator(), 997);
/// assert_eq!(rate.denominator(), 1000);
///
/// // 30 bp expressed in basis-point scale prices identically.
/// let bps = FeeRate::from_basis_points(30).expect("valid");
/// assert_eq!(bps.numerator(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// 0.3% fee: `997 / 1000`.
    pub const STANDARD: Self = Self {
        numerator: 997,
        denominator: 1_000,
    };

    /// No fee: the whole input is priced.
    pub const ZERO_FEE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a rate from its raw ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the denominator is
    /// zero, the numerator is zero (a 100% fee), or the numerator exceeds
    /// the denominator.
    pub const fn new(numerator: u32, denominator: u32) -> Result<Self, AmmError> {
        if denominator == 0 {
            return Err(AmmError::InvalidConfiguration(
                "fee denominator must be non-zero",
            ));
        }
        if numerator == 0 {
            return Err(AmmError::InvalidConfiguration(
                "fee numerator must be non-zero",
            ));
        }
        if numerator > denominator {
            return Err(AmmError::InvalidConfiguration(
                "fee numerator must not exceed denominator",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a rate that charges `fee_bps` basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `fee_bps` is 10 000 or
    /// more.
    pub const fn from_basis_points(fee_bps: u32) -> Result<Self, AmmError> {
        if fee_bps >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidConfiguration(
                "fee must be below 10000 basis points",
            ));
        }
        Self::new(BPS_DENOMINATOR - fee_bps, BPS_DENOMINATOR)
    }

    /// Returns the retained-fraction numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns `true` if the rate charges nothing.
    #[must_use]
    pub const fn is_zero_fee(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Computes the fee portion of `amount_in`, rounded up.
    ///
    /// Informational only: the fee is never moved out of the pool, it is
    /// simply the part of the input that the pricing formula ignores.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result does not fit.
    pub fn fee_on(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        let complement = u64::from(self.denominator - self.numerator);
        amount_in
            .checked_mul_div(complement, u64::from(self.denominator), Rounding::Up)
            .ok_or(AmmError::ArithmeticOverflow("fee amount"))
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
