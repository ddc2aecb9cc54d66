//! Configuration for a single constant-product pool.

use crate::domain::{Decimals, FeeRate, TokenId, TokenPair};
use crate::error::AmmError;

/// Blueprint for one `x · y = k` pool.
///
/// Holds the immutable parameters of a pool: its two tokens in creation
/// order, the swap fee rate, and the decimals of the share token the pool
/// mints. Reserves are not part of the configuration; every pool starts
/// empty and is seeded by its first deposit.
///
/// # Validation
///
/// - The two tokens must differ.
/// - The fee rate and decimals are validated at their own construction.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Decimals, FeeRate, TokenId};
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
/// let cfg = PoolConfig::new(a, b, FeeRate::STANDARD, Decimals::SHARE_DEFAULT);
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    token_a: TokenId,
    token_b: TokenId,
    fee_rate: FeeRate,
    share_decimals: Decimals,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if `token_a == token_b`.
    pub fn new(
        token_a: TokenId,
        token_b: TokenId,
        fee_rate: FeeRate,
        share_decimals: Decimals,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_a,
            token_b,
            fee_rate,
            share_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if both tokens are equal.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.token_a == self.token_b {
            return Err(AmmError::IdenticalTokens);
        }
        Ok(())
    }

    /// Returns token A, as given at creation.
    #[must_use]
    pub const fn token_a(&self) -> TokenId {
        self.token_a
    }

    /// Returns token B, as given at creation.
    #[must_use]
    pub const fn token_b(&self) -> TokenId {
        self.token_b
    }

    /// Returns the canonical unordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if the tokens are equal.
    pub fn pair(&self) -> Result<TokenPair, AmmError> {
        TokenPair::new(self.token_a, self.token_b)
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the share token's decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }
}
