//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] are implemented by the pool state
//! machine, [`FromConfig`] builds it from a configuration, and
//! [`TokenCustody`] is the seam to the ledger that holds the tokens.

mod from_config;
mod liquidity_pool;
mod swap_pool;
mod token_custody;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_custody::TokenCustody;
