//! Raw `u128` intermediates and checked narrowing.
//!
//! Every product of two `u64` amounts fits in `u128`, but the sums and
//! scaled terms of the pool formulas can exceed it, so each step here is
//! checked. Results are narrowed back to `u64` only through [`narrow`].
//!
//! Division names its direction, and the direction always favours the pool:
//!
//! | Quantity | Rounding |
//! |----------|----------|
//! | swap output | down |
//! | counter-amount of a deposit | up |
//! | minted shares | down |
//! | withdrawal payout | down |
//! | reported fee | up |

use crate::domain::Rounding;
use crate::error::AmmError;

/// Divides `numerator` by `denominator`, rounding in the given direction.
///
/// Returns `None` for a zero denominator.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::div_rounded;
///
/// // 21 · 50 / 100 = 10.5
/// assert_eq!(div_rounded(21 * 50, 100, Rounding::Up), Some(11));
/// assert_eq!(div_rounded(21 * 50, 100, Rounding::Down), Some(10));
/// ```
#[must_use]
pub const fn div_rounded(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    // A remainder implies denominator > 1, so quotient + 1 cannot overflow.
    match rounding {
        Rounding::Up if numerator % denominator != 0 => Some(quotient + 1),
        _ => Some(quotient),
    }
}

/// Computes `a · b / d` in `u128` with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `a · b` overflows `u128` or
/// `d` is zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::mul_div;
///
/// assert_eq!(mul_div(20, 50, 100, Rounding::Up), Ok(10));
/// assert!(mul_div(1, 1, 0, Rounding::Down).is_err());
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128, AmmError> {
    let product = a
        .checked_mul(b)
        .ok_or(AmmError::ArithmeticOverflow("mul_div product"))?;
    div_rounded(product, d, rounding).ok_or(AmmError::ArithmeticOverflow("mul_div by zero"))
}

/// Narrows a `u128` intermediate back to a `u64` amount.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `value > u64::MAX`.
pub fn narrow(value: u128) -> Result<u64, AmmError> {
    u64::try_from(value).map_err(|_| AmmError::ArithmeticOverflow("narrowing to u64"))
}

/// Checked `u128` multiplication.
pub(crate) fn checked_mul(a: u128, b: u128, context: &'static str) -> Result<u128, AmmError> {
    a.checked_mul(b).ok_or(AmmError::ArithmeticOverflow(context))
}

/// Checked `u128` addition.
pub(crate) fn checked_add(a: u128, b: u128, context: &'static str) -> Result<u128, AmmError> {
    a.checked_add(b).ok_or(AmmError::ArithmeticOverflow(context))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- div_rounded ----------------------------------------------------------

    #[test]
    fn deposit_counter_amount_rounds_up() {
        // (100, 50) pool: 20 A needs exactly 10 B, 21 A needs 10.5 -> 11.
        assert_eq!(div_rounded(20 * 50, 100, Rounding::Up), Some(10));
        assert_eq!(div_rounded(21 * 50, 100, Rounding::Up), Some(11));
    }

    #[test]
    fn withdrawal_payout_rounds_down() {
        // 100 of 200 shares against 100 is exact; 33 of 200 against 101 leaves dust.
        assert_eq!(div_rounded(100 * 100, 200, Rounding::Down), Some(50));
        assert_eq!(div_rounded(33 * 101, 200, Rounding::Down), Some(16));
        assert_eq!(div_rounded(33 * 101, 200, Rounding::Up), Some(17));
    }

    #[test]
    fn minted_shares_round_down_to_zero() {
        // A 1-unit deposit into (1_002_000, 2) with 2_000 shares mints nothing.
        assert_eq!(div_rounded(2_000, 1_002_000, Rounding::Down), Some(0));
        assert_eq!(div_rounded(2_000, 1_002_000, Rounding::Up), Some(1));
    }

    #[test]
    fn div_rounded_zero_denominator() {
        assert_eq!(div_rounded(1, 0, Rounding::Down), None);
        assert_eq!(div_rounded(1, 0, Rounding::Up), None);
    }

    #[test]
    fn div_rounded_full_width() {
        let wide = u128::from(u64::MAX) * u128::from(u64::MAX);
        let max = u128::from(u64::MAX);
        assert_eq!(div_rounded(wide, max, Rounding::Up), Some(max));
        assert_eq!(div_rounded(u128::MAX, 2, Rounding::Up), Some(u128::MAX / 2 + 1));
    }

    // -- mul_div --------------------------------------------------------------

    #[test]
    fn mul_div_floor_and_ceil() {
        assert_eq!(mul_div(7, 3, 2, Rounding::Down), Ok(10));
        assert_eq!(mul_div(7, 3, 2, Rounding::Up), Ok(11));
    }

    #[test]
    fn mul_div_product_overflow() {
        let Err(AmmError::ArithmeticOverflow(ctx)) = mul_div(u128::MAX, 2, 1, Rounding::Down)
        else {
            panic!("expected ArithmeticOverflow");
        };
        assert_eq!(ctx, "mul_div product");
    }

    #[test]
    fn mul_div_zero_denominator() {
        assert!(mul_div(1, 1, 0, Rounding::Up).is_err());
    }

    #[test]
    fn narrow_bounds() {
        assert_eq!(narrow(u128::from(u64::MAX)), Ok(u64::MAX));
        assert!(narrow(u128::from(u64::MAX) + 1).is_err());
    }

    #[test]
    fn checked_helpers() {
        assert_eq!(checked_mul(3, 4, "x"), Ok(12));
        assert_eq!(checked_add(3, 4, "x"), Ok(7));
        assert_eq!(
            checked_mul(u128::MAX, 2, "x"),
            Err(AmmError::ArithmeticOverflow("x"))
        );
        assert_eq!(
            checked_add(u128::MAX, 1, "y"),
            Err(AmmError::ArithmeticOverflow("y"))
        );
    }
}
