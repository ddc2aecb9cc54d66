//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, CallContext, Decimals, DepositOutcome, DepositRequest, FeeRate, Rounding,
    Shares, SwapOutcome, TokenId, TokenPair, WithdrawOutcome,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool, TokenCustody};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{ExchangeConfig, PoolConfig};

pub use crate::custody::{InMemoryCustody, Movement, Settlement};

pub use crate::exchange::Exchange;

pub use crate::pools::{PoolAccounts, PoolState};

pub use crate::registry::PoolRegistry;

pub use crate::error::{AmmError, Result};
