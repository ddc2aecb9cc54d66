//! The constant-product pool state machine.
//!
//! [`PoolState`] is the authoritative record of one pair's reserves and
//! share supply. It implements [`SwapPool`](crate::traits::SwapPool) in
//! `swap` and [`LiquidityPool`](crate::traits::LiquidityPool) in
//! `liquidity`; every mutating operation is computed as a quote first and
//! committed only if the whole quote succeeds.
//!
//! [`PoolAccounts`] holds the addresses derived for a pool: its authority,
//! its two vaults, and its share mint.

mod accounts;
mod liquidity;
mod state;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use accounts::{PoolAccounts, PoolAuthority};
pub use state::{PoolState, Side};
