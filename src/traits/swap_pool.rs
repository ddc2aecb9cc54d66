//! Core swap trait for pricing and executing trades against a pool.
//!
//! [`SwapPool`] covers the swap lifecycle:
//!
//! 1. **Quote**: [`SwapPool::quote_swap`] prices a trade with no side
//!    effects.
//! 2. **Execute**: [`SwapPool::swap`] prices the same trade, enforces the
//!    caller's minimum, and commits the reserve update.
//! 3. **Inspect**: [`SwapPool::token_pair`] and [`SwapPool::fee_rate`].
//!
//! # Fee Invariant
//!
//! The fee is never moved out of the pool. The pricing formula only sees
//! `amount_in · n / d` of the input, but the full `amount_in` is added to
//! the input reserve:
//!
//! ```text
//! amount_out  = ⌊amount_in·n · reserve_out / (reserve_in·d + amount_in·n)⌋
//! reserve_in' = reserve_in + amount_in
//! reserve_out' = reserve_out − amount_out
//! ```
//!
//! so `reserve_in' · reserve_out' ≥ reserve_in · reserve_out` after every
//! swap.

use crate::domain::{Amount, FeeRate, SwapOutcome, TokenId, TokenPair};
use crate::error::AmmError;

/// Trait for pools that can price and execute swaps.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`]. Common variants:
///
/// - [`AmmError::InvalidToken`]: the input token is not in the pool's pair
/// - [`AmmError::ZeroAmount`]: zero input
/// - [`AmmError::EmptyPool`]: one or both reserves are zero
/// - [`AmmError::ArithmeticOverflow`]: an intermediate does not fit
pub trait SwapPool {
    /// Prices selling `amount_in` of `token_in` without changing the pool.
    ///
    /// # Errors
    ///
    /// See the trait-level list; never returns
    /// [`AmmError::SlippageExceeded`].
    fn quote_swap(&self, token_in: TokenId, amount_in: Amount) -> Result<SwapOutcome, AmmError>;

    /// Sells `amount_in` of `token_in` and commits the new reserves.
    ///
    /// Atomic: on any error the pool is unchanged.
    ///
    /// # Errors
    ///
    /// Everything [`SwapPool::quote_swap`] returns, plus
    /// [`AmmError::SlippageExceeded`] if the output is below
    /// `amount_out_min` and [`AmmError::InvariantViolation`] if the reserve
    /// product would decrease.
    fn swap(
        &mut self,
        token_in: TokenId,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapOutcome, AmmError>;

    /// Returns the canonical token pair managed by this pool.
    #[must_use]
    fn token_pair(&self) -> TokenPair;

    /// Returns the fee rate applied to swaps.
    #[must_use]
    fn fee_rate(&self) -> FeeRate;
}
