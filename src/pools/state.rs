//! The authoritative record of one pool.

use core::fmt;

use super::PoolAccounts;
use crate::config::PoolConfig;
use crate::domain::{Amount, Decimals, FeeRate, Shares, TokenId, TokenPair};
use crate::error::AmmError;
use crate::traits::FromConfig;

/// Which of the pool's two stored tokens an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The pool's `token_a`.
    A,
    /// The pool's `token_b`.
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A constant-product pool (`x · y = k`) over one unordered token pair.
///
/// Created from a [`PoolConfig`] via [`FromConfig`] with zero reserves and
/// zero shares; the first deposit seeds it. Tokens keep the order they were
/// given at creation (`token_a`, `token_b`); the accounts are derived from
/// the canonical [`TokenPair`] so either order finds the same pool.
///
/// # State
///
/// - `reserve_a` / `reserve_b`: token balances the pool owns, fees included
/// - `share_supply`: outstanding liquidity shares
/// - `accumulated_fees_a` / `accumulated_fees_b`: lifetime fee counters,
///   informational only
///
/// # Invariants
///
/// - `share_supply == 0` exactly when both reserves are zero.
/// - `reserve_a · reserve_b` never decreases across a swap.
///
/// # Example
///
/// ```rust
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Amount, Decimals, DepositRequest, FeeRate, Shares, TokenId};
/// use pairswap::pools::PoolState;
/// use pairswap::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
/// let cfg = PoolConfig::new(a, b, FeeRate::STANDARD, Decimals::SHARE_DEFAULT).expect("valid");
/// let mut pool = PoolState::from_config(&cfg).expect("pool created");
///
/// let req = DepositRequest::new(Amount::new(100_000), Amount::new(100_000)).expect("non-zero");
/// let minted = pool.deposit(&req).expect("bootstrap");
/// assert_eq!(minted.shares_minted, Shares::new(200_000));
///
/// let outcome = pool.swap(a, Amount::new(100_000), Amount::ZERO).expect("swap ok");
/// assert_eq!(outcome.amount_out(), Amount::new(49_924));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    pub(super) token_a: TokenId,
    pub(super) token_b: TokenId,
    pub(super) reserve_a: Amount,
    pub(super) reserve_b: Amount,
    pub(super) share_supply: Shares,
    pub(super) fee_rate: FeeRate,
    pub(super) share_decimals: Decimals,
    pub(super) accounts: PoolAccounts,
    pub(super) accumulated_fees_a: Amount,
    pub(super) accumulated_fees_b: Amount,
}

impl PoolState {
    /// Returns token A, in creation order.
    #[must_use]
    pub const fn token_a(&self) -> TokenId {
        self.token_a
    }

    /// Returns token B, in creation order.
    #[must_use]
    pub const fn token_b(&self) -> TokenId {
        self.token_b
    }

    /// Returns the current reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the share token's decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }

    /// Returns the pool's derived accounts.
    #[must_use]
    pub const fn accounts(&self) -> &PoolAccounts {
        &self.accounts
    }

    /// Returns the lifetime fees retained on token A inputs.
    pub const fn accumulated_fees_a(&self) -> Amount {
        self.accumulated_fees_a
    }

    /// Returns the lifetime fees retained on token B inputs.
    pub const fn accumulated_fees_b(&self) -> Amount {
        self.accumulated_fees_b
    }

    /// Returns `true` while no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// Returns which stored side `token` is.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pool.
    pub fn side_of(&self, token: TokenId) -> Result<Side, AmmError> {
        if token == self.token_a {
            Ok(Side::A)
        } else if token == self.token_b {
            Ok(Side::B)
        } else {
            Err(AmmError::InvalidToken("token is not part of the pool"))
        }
    }

    /// Returns the token on `side`.
    #[must_use]
    pub const fn token(&self, side: Side) -> TokenId {
        match side {
            Side::A => self.token_a,
            Side::B => self.token_b,
        }
    }

    /// Returns the reserve on `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    pub(super) fn set_reserve(&mut self, side: Side, value: Amount) {
        match side {
            Side::A => self.reserve_a = value,
            Side::B => self.reserve_b = value,
        }
    }

    pub(super) const fn accumulated_fees(&self, side: Side) -> Amount {
        match side {
            Side::A => self.accumulated_fees_a,
            Side::B => self.accumulated_fees_b,
        }
    }

    pub(super) fn set_accumulated_fees(&mut self, side: Side, value: Amount) {
        match side {
            Side::A => self.accumulated_fees_a = value,
            Side::B => self.accumulated_fees_b = value,
        }
    }

    /// Checks the supply/reserve invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if shares are outstanding
    /// against an empty reserve, or reserves exist without shares.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let drained = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        let one_empty = self.reserve_a.is_zero() || self.reserve_b.is_zero();
        if self.share_supply.is_zero() != drained || (!self.share_supply.is_zero() && one_empty) {
            return Err(AmmError::InvariantViolation(
                "share supply and reserves disagree",
            ));
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for PoolState {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let pair = TokenPair::new(config.token_a(), config.token_b())?;
        Ok(Self {
            token_a: config.token_a(),
            token_b: config.token_b(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            share_supply: Shares::ZERO,
            fee_rate: config.fee_rate(),
            share_decimals: config.share_decimals(),
            accounts: PoolAccounts::derive(pair),
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
        })
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool(reserves={}/{}, shares={}, fee={})",
            self.reserve_a, self.reserve_b, self.share_supply, self.fee_rate
        )
    }
}
