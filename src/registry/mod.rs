//! Lookup and creation of pools.
//!
//! The [`PoolRegistry`] maps each unordered [`TokenPair`](crate::domain::TokenPair)
//! to at most one pool and hands out exclusive access to it, either
//! blocking ([`PoolRegistry::with_pool`]) or failing fast with
//! [`AmmError::PoolLocked`](crate::error::AmmError::PoolLocked)
//! ([`PoolRegistry::try_with_pool`]).

mod pool_registry;

pub use pool_registry::{PoolHandle, PoolRegistry};
