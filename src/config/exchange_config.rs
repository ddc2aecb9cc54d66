//! Exchange-wide defaults applied to every new pool.

use super::PoolConfig;
use crate::domain::{Decimals, FeeRate, TokenId};
use crate::error::AmmError;

/// Defaults the [`Exchange`](crate::exchange::Exchange) stamps onto every
/// pool it creates.
///
/// The default is a 997/1000 fee rate and 9-decimal share tokens.
///
/// # Examples
///
/// ```
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{Decimals, FeeRate};
///
/// let cfg = ExchangeConfig::default()
///     .with_fee_rate(FeeRate::from_basis_points(25).expect("valid"))
///     .with_share_decimals(Decimals::new(6).expect("valid"));
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    fee_rate: FeeRate,
    share_decimals: Decimals,
}

impl ExchangeConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(fee_rate: FeeRate, share_decimals: Decimals) -> Self {
        Self {
            fee_rate,
            share_decimals,
        }
    }

    /// Replaces the fee rate.
    #[must_use]
    pub const fn with_fee_rate(mut self, fee_rate: FeeRate) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Replaces the share-token decimals.
    #[must_use]
    pub const fn with_share_decimals(mut self, share_decimals: Decimals) -> Self {
        self.share_decimals = share_decimals;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the fee rate or the
    /// decimals are out of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        FeeRate::new(self.fee_rate.numerator(), self.fee_rate.denominator())?;
        Decimals::new(self.share_decimals.get())?;
        Ok(())
    }

    /// Returns the fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the share-token decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }

    /// Builds the [`PoolConfig`] for a new pool over `token_a` and `token_b`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if the tokens are equal.
    pub fn pool_config(&self, token_a: TokenId, token_b: TokenId) -> Result<PoolConfig, AmmError> {
        PoolConfig::new(token_a, token_b, self.fee_rate, self.share_decimals)
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::new(FeeRate::STANDARD, Decimals::SHARE_DEFAULT)
    }
}
