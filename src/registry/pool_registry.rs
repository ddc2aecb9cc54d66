//! Concurrent registry of pools keyed by unordered token pair.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;

use crate::domain::TokenPair;
use crate::error::AmmError;
use crate::pools::PoolState;
use crate::traits::SwapPool;

/// Shared handle to one registered pool.
pub type PoolHandle = Arc<Mutex<PoolState>>;

/// Every pool the exchange knows about, one per unordered token pair.
///
/// Pools are created once and never removed. Each pool sits behind its own
/// [`Mutex`], so operations on different pools run in parallel while
/// operations on the same pool are serialized.
///
/// # Thread Safety
///
/// `PoolRegistry` is `Send + Sync`. Lookups clone the [`PoolHandle`] and
/// release the map shard before the pool is locked.
///
/// # Example
///
/// ```rust
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Decimals, FeeRate, TokenId, TokenPair};
/// use pairswap::pools::PoolState;
/// use pairswap::registry::PoolRegistry;
/// use pairswap::traits::{FromConfig, LiquidityPool};
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
/// let cfg = PoolConfig::new(a, b, FeeRate::STANDARD, Decimals::SHARE_DEFAULT).expect("valid");
///
/// let registry = PoolRegistry::new();
/// registry.create(PoolState::from_config(&cfg).expect("pool")).expect("created");
///
/// // Either order finds the same pool.
/// let pair = TokenPair::new(b, a).expect("distinct");
/// let supply = registry.with_pool(&pair, |pool| Ok(pool.share_supply())).expect("found");
/// assert!(supply.is_zero());
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: DashMap<TokenPair, PoolHandle>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: DashMap::new(),
        }
    }

    /// Registers a new pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if a pool is already
    /// registered for the same unordered pair.
    pub fn create(&self, state: PoolState) -> Result<PoolHandle, AmmError> {
        self.create_with(state, |_| Ok(()))
    }

    /// Registers a new pool after `init` succeeds.
    ///
    /// `init` runs while the pair's slot is reserved, so two concurrent
    /// creations of the same pair cannot both run it. If `init` fails
    /// nothing is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] for a duplicate pair, or
    /// whatever `init` returns.
    pub fn create_with<F>(&self, state: PoolState, init: F) -> Result<PoolHandle, AmmError>
    where
        F: FnOnce(&PoolState) -> Result<(), AmmError>,
    {
        state.check_invariants()?;
        let pair = state.token_pair();
        match self.pools.entry(pair) {
            Entry::Occupied(_) => Err(AmmError::PoolAlreadyExists),
            Entry::Vacant(slot) => {
                init(&state)?;
                info!(
                    token_a = %state.token_a(),
                    token_b = %state.token_b(),
                    authority = %state.accounts().authority_address(),
                    fee = %state.fee_rate(),
                    "pool created"
                );
                let handle = Arc::new(Mutex::new(state));
                slot.insert(Arc::clone(&handle));
                Ok(handle)
            }
        }
    }

    /// Returns the handle of the pool for `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool is registered.
    pub fn get(&self, pair: &TokenPair) -> Result<PoolHandle, AmmError> {
        self.pools
            .get(pair)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(AmmError::PoolNotFound)
    }

    /// Returns `true` if a pool is registered for `pair`.
    #[must_use]
    pub fn contains(&self, pair: &TokenPair) -> bool {
        self.pools.contains_key(pair)
    }

    /// Returns a copy of the pool's current state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool is registered.
    pub fn snapshot(&self, pair: &TokenPair) -> Result<PoolState, AmmError> {
        let handle = self.get(pair)?;
        let state = handle.lock().clone();
        Ok(state)
    }

    /// Runs `f` with exclusive access to the pool, blocking until the pool
    /// is free.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool is registered, or
    /// whatever `f` returns.
    pub fn with_pool<R, F>(&self, pair: &TokenPair, f: F) -> Result<R, AmmError>
    where
        F: FnOnce(&mut PoolState) -> Result<R, AmmError>,
    {
        let handle = self.get(pair)?;
        let mut guard = handle.lock();
        f(&mut guard)
    }

    /// Runs `f` with exclusive access to the pool without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolLocked`] if another operation holds the
    /// pool; the caller retries from fresh state.
    pub fn try_with_pool<R, F>(&self, pair: &TokenPair, f: F) -> Result<R, AmmError>
    where
        F: FnOnce(&mut PoolState) -> Result<R, AmmError>,
    {
        let handle = self.get(pair)?;
        let Some(mut guard) = handle.try_lock() else {
            return Err(AmmError::PoolLocked);
        };
        f(&mut guard)
    }

    /// Returns the pairs of all registered pools, in no particular order.
    #[must_use]
    pub fn pairs(&self) -> Vec<TokenPair> {
        self.pools.iter().map(|entry| *entry.key()).collect()
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
