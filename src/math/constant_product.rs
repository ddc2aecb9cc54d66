//! Closed-form formulas of the `x · y = k` pool.
//!
//! All functions are pure: they take reserves and amounts by value and
//! return the computed quantity without touching any pool. The pool
//! implementations in [`crate::pools`] call them first to quote and then
//! commit the quoted result.

use super::fixed_point::{checked_add, checked_mul, div_rounded, mul_div, narrow};
use super::CheckedArithmetic;
use crate::domain::{Amount, FeeRate, Rounding, Shares};
use crate::error::AmmError;

/// Output of selling `amount_in` into a pool holding `reserve_in` and
/// `reserve_out`:
///
/// ```text
/// ⌊amount_in·n · reserve_out / (reserve_in·d + amount_in·n)⌋
/// ```
///
/// where `n / d` is the fee rate.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if an intermediate does not fit.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeRate};
/// use pairswap::math::constant_product::swap_output;
///
/// let out = swap_output(
///     Amount::new(100_000),
///     Amount::new(100_000),
///     Amount::new(100_000),
///     FeeRate::STANDARD,
/// );
/// assert_eq!(out, Ok(Amount::new(49_924)));
/// ```
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_rate: FeeRate,
) -> Result<Amount, AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    let in_with_fee = checked_mul(
        amount_in.wide(),
        u128::from(fee_rate.numerator()),
        "swap input with fee",
    )?;
    let numerator = checked_mul(in_with_fee, reserve_out.wide(), "swap numerator")?;
    let scaled_reserve = checked_mul(
        reserve_in.wide(),
        u128::from(fee_rate.denominator()),
        "swap scaled reserve",
    )?;
    let denominator = checked_add(scaled_reserve, in_with_fee, "swap denominator")?;
    let out = div_rounded(numerator, denominator, Rounding::Down)
        .ok_or(AmmError::ArithmeticOverflow("swap division"))?;
    Ok(Amount::new(narrow(out)?))
}

/// The part of `amount_in` that the pricing formula ignores, rounded up.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if the fee does not fit.
pub fn swap_fee(amount_in: Amount, fee_rate: FeeRate) -> Result<Amount, AmmError> {
    fee_rate.fee_on(amount_in)
}

/// The amount of the other token that matches `amount` at the current
/// reserve ratio, rounded up so the pool never takes less than its ratio.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if `reserve_from` is zero.
/// - [`AmmError::ArithmeticOverflow`] if the result does not fit.
pub fn quote(amount: Amount, reserve_from: Amount, reserve_to: Amount) -> Result<Amount, AmmError> {
    if reserve_from.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    let q = mul_div(amount.wide(), reserve_to.wide(), reserve_from.wide(), Rounding::Up)?;
    Ok(Amount::new(narrow(q)?))
}

/// Picks the deposit amounts that match the reserve ratio without exceeding
/// either desired amount.
///
/// Tries to use all of `a_desired` first; if the matching `b` is more than
/// `b_desired`, uses all of `b_desired` instead.
///
/// # Errors
///
/// Propagates [`quote`] errors.
pub fn match_ratio(
    a_desired: Amount,
    b_desired: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount), AmmError> {
    let b_required = quote(a_desired, reserve_a, reserve_b)?;
    if b_required <= b_desired {
        return Ok((a_desired, b_required));
    }
    let a_required = quote(b_desired, reserve_b, reserve_a)?;
    Ok((a_required, b_desired))
}

/// Shares minted by the first deposit into an empty pool: `a + b`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if the sum does not fit.
pub fn bootstrap_shares(a: Amount, b: Amount) -> Result<Shares, AmmError> {
    a.checked_add(&b)
        .map(Shares::from)
        .ok_or(AmmError::ArithmeticOverflow("bootstrap shares"))
}

/// Shares minted for a deposit of `(a, b)` into a funded pool: the smaller
/// of the two proportional claims, `min(⌊a·S/ra⌋, ⌊b·S/rb⌋)`.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if neither claim fits.
pub fn proportional_shares(
    a: Amount,
    b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    supply: Shares,
) -> Result<Shares, AmmError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    let by_a = supply.safe_mul_div(a.get(), reserve_a.get(), Rounding::Down).ok();
    let by_b = supply.safe_mul_div(b.get(), reserve_b.get(), Rounding::Down).ok();
    match (by_a, by_b) {
        (Some(x), Some(y)) => Ok(x.min(y)),
        // A claim past u64::MAX is never the smaller one.
        (Some(x), None) | (None, Some(x)) => Ok(x),
        (None, None) => Err(AmmError::ArithmeticOverflow("share claim")),
    }
}

/// Payout of one reserve for burning `shares` out of `supply`, rounded down.
///
/// # Errors
///
/// - [`AmmError::InsufficientShares`] if `supply` is zero or below `shares`.
/// - [`AmmError::ArithmeticOverflow`] if the payout does not fit.
pub fn redeem(shares: Shares, reserve: Amount, supply: Shares) -> Result<Amount, AmmError> {
    if supply.is_zero() || shares > supply {
        return Err(AmmError::InsufficientShares("burn exceeds share supply"));
    }
    reserve.safe_mul_div(shares.get(), supply.get(), Rounding::Down)
}

/// The pool invariant `reserve_a · reserve_b`. Never overflows `u128`.
#[must_use]
pub const fn product(reserve_a: Amount, reserve_b: Amount) -> u128 {
    reserve_a.wide() * reserve_b.wide()
}
