//! `Result`-returning arithmetic on [`Amount`] and [`Shares`].
//!
//! Pool code updates reserves, fee counters and share supply through
//! [`CheckedArithmetic`] so that an overflow aborts the whole transition
//! with [`AmmError::ArithmeticOverflow`] instead of wrapping or clamping.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::{Amount, Rounding};
//! use pairswap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100);
//! assert_eq!(reserve.safe_add(&Amount::new(20)), Ok(Amount::new(120)));
//! assert!(reserve.safe_sub(&Amount::new(101)).is_err());
//!
//! // Burning 1 of 3 shares pays out a third of the reserve, floored.
//! assert_eq!(reserve.safe_mul_div(1, 3, Rounding::Down), Ok(Amount::new(33)));
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Checked operations whose failures surface as
/// [`AmmError::ArithmeticOverflow`], tagged with the operation name.
pub trait CheckedArithmetic: Sized {
    /// `self + other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] past `u64::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] below zero.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self · numerator / denominator`, formed in `u128` and rounded in
    /// the given direction.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] for a zero denominator or a
    /// quotient past `u64::MAX`.
    fn safe_mul_div(
        &self,
        numerator: u64,
        denominator: u64,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition"))
    }

    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction"))
    }

    fn safe_mul_div(
        &self,
        numerator: u64,
        denominator: u64,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        self.checked_mul_div(numerator, denominator, rounding)
            .ok_or(AmmError::ArithmeticOverflow("amount mul_div"))
    }
}

impl CheckedArithmetic for Shares {
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share addition"))
    }

    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("share subtraction"))
    }

    fn safe_mul_div(
        &self,
        numerator: u64,
        denominator: u64,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        self.as_amount()
            .checked_mul_div(numerator, denominator, rounding)
            .map(Shares::from)
            .ok_or(AmmError::ArithmeticOverflow("share mul_div"))
    }
}
