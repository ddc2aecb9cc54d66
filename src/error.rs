//! Unified error types for the pairswap engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant is terminal for the attempted operation: the
//! engine never retries, clamps, or wraps, and a failed operation leaves
//! pool state exactly as it was.

use thiserror::Error;

/// Every way a pool operation can fail.
///
/// Variants that carry a `&'static str` name the precise computation or
/// check that failed, so callers can log them without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A pool is already registered for this unordered token pair.
    #[error("a pool already exists for this token pair")]
    PoolAlreadyExists,

    /// Both sides of the requested pair are the same token.
    #[error("a pool requires two distinct tokens")]
    IdenticalTokens,

    /// A deposit that is zero on one side, or too small to mint a share.
    #[error("zero deposit: {0}")]
    ZeroDeposit(&'static str),

    /// A caller-supplied minimum was not met.
    #[error("slippage bound exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// Burning zero shares, or more shares than are outstanding.
    #[error("insufficient shares: {0}")]
    InsufficientShares(&'static str),

    /// A swap was attempted against a pool with an empty reserve.
    #[error("pool has no reserves to trade against")]
    EmptyPool,

    /// An intermediate or final value does not fit its integer type.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The caller is not allowed to perform the requested movement.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// No pool is registered for this token pair.
    #[error("no pool exists for this token pair")]
    PoolNotFound,

    /// A token that is not part of the pool's pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A zero-sized trade input or a trade whose output rounds to zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// Another operation holds the pool; retry from fresh state.
    #[error("pool is locked by a concurrent operation")]
    PoolLocked,

    /// A custody account cannot cover a debit.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An internal accounting invariant does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
