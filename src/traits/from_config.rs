//! Construction of a pool from its configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** re-validate the configuration during
//! construction. A successfully constructed pool is in a valid initial
//! state: distinct tokens, a valid fee rate, zero reserves and zero shares.

use crate::error::AmmError;

/// Builds a value from a configuration struct.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolState`
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] or
/// [`AmmError::IdenticalTokens`] if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
