//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds proportional share accounting on top of the swap
//! functionality provided by [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The share supply reported by [`LiquidityPool::share_supply`] **only**
//! changes through [`LiquidityPool::deposit`] and
//! [`LiquidityPool::withdraw`]. Swaps never mint or burn shares; they only
//! grow the reserves each share redeems for.
//!
//! ```text
//! share_supply == 0  ⇔  reserve_a == 0 ∧ reserve_b == 0
//! ```

use super::SwapPool;
use crate::domain::{DepositOutcome, DepositRequest, Shares, WithdrawOutcome};
use crate::error::AmmError;

/// Trait for pools that accept deposits and redeem shares.
///
/// All amounts in requests and outcomes follow the pool's stored token
/// order.
///
/// # Errors
///
/// - [`AmmError::ZeroDeposit`]: a zero-sided deposit, or one too small to
///   mint a share
/// - [`AmmError::SlippageExceeded`]: a used amount is below its minimum
/// - [`AmmError::InsufficientShares`]: burning zero or more than the supply
/// - [`AmmError::ArithmeticOverflow`]: an intermediate does not fit
pub trait LiquidityPool: SwapPool {
    /// Computes what [`LiquidityPool::deposit`] would use and mint, without
    /// changing the pool.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::deposit`].
    fn quote_deposit(&self, request: &DepositRequest) -> Result<DepositOutcome, AmmError>;

    /// Adds liquidity and mints shares.
    ///
    /// The first deposit into an empty pool uses both desired amounts as-is
    /// and mints their sum. Later deposits are cut down to the current
    /// reserve ratio and mint the smaller of the two proportional claims.
    ///
    /// # Errors
    ///
    /// See the trait-level list.
    fn deposit(&mut self, request: &DepositRequest) -> Result<DepositOutcome, AmmError>;

    /// Computes what [`LiquidityPool::withdraw`] would pay out, without
    /// changing the pool.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::withdraw`].
    fn quote_withdraw(&self, shares: Shares) -> Result<WithdrawOutcome, AmmError>;

    /// Burns `shares` and pays out the proportional part of each reserve,
    /// rounded down. Rounding dust stays in the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero or
    /// exceeds the supply.
    fn withdraw(&mut self, shares: Shares) -> Result<WithdrawOutcome, AmmError>;

    /// Returns the number of outstanding shares.
    #[must_use]
    fn share_supply(&self) -> Shares;
}
