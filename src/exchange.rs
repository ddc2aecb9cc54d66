//! The entry point that ties pools to custody.
//!
//! Every mutating call follows the same path:
//!
//! 1. Admit the caller's [`CallContext`] (strictly increasing sequence).
//! 2. Look the pool up by unordered pair and lock it.
//! 3. Compute the transition on a copy of the pool.
//! 4. Settle the resulting movements with custody.
//! 5. Commit the copy.
//!
//! A failure at any step leaves both the pool and custody untouched.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::config::ExchangeConfig;
use crate::custody::Settlement;
use crate::domain::{
    Address, Amount, CallContext, DepositOutcome, DepositRequest, Shares, SwapOutcome, TokenId,
    TokenPair, WithdrawOutcome,
};
use crate::error::AmmError;
use crate::pools::{PoolAccounts, PoolState};
use crate::registry::PoolRegistry;
use crate::traits::{FromConfig, LiquidityPool, SwapPool, TokenCustody};

/// A set of constant-product pools settled against one custody ledger.
///
/// Token pairs may be given in either order; amounts in requests and
/// outcomes always follow the order the caller used.
///
/// # Example
///
/// ```rust
/// use pairswap::custody::InMemoryCustody;
/// use pairswap::domain::{Address, Amount, CallContext, DepositRequest, TokenId};
/// use pairswap::exchange::Exchange;
///
/// let usdc = TokenId::from_bytes([1u8; 32]);
/// let weth = TokenId::from_bytes([2u8; 32]);
/// let alice = Address::from_bytes([7u8; 32]);
///
/// let exchange = Exchange::with_defaults(InMemoryCustody::new());
/// exchange.with_custody(|c| {
///     c.credit(usdc, alice, Amount::new(1_000_000)).expect("funded");
///     c.credit(weth, alice, Amount::new(1_000_000)).expect("funded");
/// });
///
/// let ctx = CallContext::new(alice, 1);
/// exchange.create_pool(ctx, usdc, weth).expect("created");
///
/// let req = DepositRequest::new(Amount::new(100_000), Amount::new(100_000)).expect("non-zero");
/// exchange.deposit(ctx.next(), usdc, weth, req).expect("deposited");
///
/// let out = exchange
///     .swap(ctx.next().next(), usdc, weth, Amount::new(100_000), Amount::ZERO)
///     .expect("swapped");
/// assert_eq!(out.amount_out(), Amount::new(49_924));
/// exchange.verify_reserves(usdc, weth).expect("vaults match reserves");
/// ```
#[derive(Debug)]
pub struct Exchange<C: TokenCustody> {
    registry: PoolRegistry,
    custody: Mutex<C>,
    config: ExchangeConfig,
    sequences: DashMap<Address, u64>,
}

impl<C: TokenCustody> Exchange<C> {
    /// Creates an exchange over `custody`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(custody: C, config: ExchangeConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            registry: PoolRegistry::new(),
            custody: Mutex::new(custody),
            config,
            sequences: DashMap::new(),
        })
    }

    /// Creates an exchange with [`ExchangeConfig::default`].
    #[must_use]
    pub fn with_defaults(custody: C) -> Self {
        Self {
            registry: PoolRegistry::new(),
            custody: Mutex::new(custody),
            config: ExchangeConfig::default(),
            sequences: DashMap::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Runs `f` with exclusive access to custody.
    pub fn with_custody<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.custody.lock())
    }

    /// Consumes the exchange and returns its custody.
    pub fn into_custody(self) -> C {
        self.custody.into_inner()
    }

    /// Returns the balance of `token` held by `holder` in custody.
    #[must_use]
    pub fn balance(&self, token: TokenId, holder: Address) -> Amount {
        self.custody.lock().balance(token, holder)
    }

    /// Returns the last admitted sequence number of `caller`.
    #[must_use]
    pub fn last_sequence(&self, caller: Address) -> Option<u64> {
        self.sequences.get(&caller).map(|entry| *entry.value())
    }

    // -- Operations -----------------------------------------------------------

    /// Creates the pool for `token_a`/`token_b` and opens its accounts in
    /// custody.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] for a stale sequence.
    /// - [`AmmError::IdenticalTokens`] if both tokens are equal.
    /// - [`AmmError::PoolAlreadyExists`] if the pair, in either order, is
    ///   already registered.
    pub fn create_pool(
        &self,
        ctx: CallContext,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<PoolAccounts, AmmError> {
        self.admit(&ctx)?;
        let pool_config = self.config.pool_config(token_a, token_b)?;
        let state = PoolState::from_config(&pool_config)?;
        let accounts = state.accounts().clone();
        self.registry.create_with(state, |pool| {
            self.custody
                .lock()
                .open_pool_accounts(pool.accounts(), pool.share_decimals())
        })?;
        Ok(accounts)
    }

    /// Deposits liquidity into the pool and mints shares to the caller.
    ///
    /// `request` amounts are in `(token_a, token_b)` order.
    ///
    /// # Errors
    ///
    /// Everything [`LiquidityPool::deposit`] returns, plus
    /// [`AmmError::PoolNotFound`], [`AmmError::Unauthorized`] for a stale
    /// sequence, and custody errors such as
    /// [`AmmError::InsufficientBalance`].
    pub fn deposit(
        &self,
        ctx: CallContext,
        token_a: TokenId,
        token_b: TokenId,
        request: DepositRequest,
    ) -> Result<DepositOutcome, AmmError> {
        self.admit(&ctx)?;
        let pair = TokenPair::new(token_a, token_b)?;
        self.registry.with_pool(&pair, |pool| {
            let reversed = pool.token_a() != token_a;
            let request = if reversed { request.swapped() } else { request };

            let mut next = pool.clone();
            let outcome = next.deposit(&request)?;

            let caller = ctx.caller();
            let accounts = next.accounts();
            let settlement = Settlement::new(caller)
                .with_authority(accounts.authority())
                .transfer(
                    next.token_a(),
                    caller,
                    accounts.vault(next.token_a())?,
                    outcome.amount_a,
                )
                .transfer(
                    next.token_b(),
                    caller,
                    accounts.vault(next.token_b())?,
                    outcome.amount_b,
                )
                .mint(accounts.share_mint(), caller, outcome.shares_minted.as_amount());
            self.settle(&settlement, "deposit")?;

            *pool = next;
            debug!(
                caller = %caller,
                amount_a = %outcome.amount_a,
                amount_b = %outcome.amount_b,
                shares = %outcome.shares_minted,
                reserve_a = %pool.reserve_a(),
                reserve_b = %pool.reserve_b(),
                "deposit committed"
            );
            Ok(if reversed { outcome.swapped() } else { outcome })
        })
    }

    /// Burns the caller's shares and pays out both tokens.
    ///
    /// Amounts in the outcome are in `(token_a, token_b)` order.
    ///
    /// # Errors
    ///
    /// Everything [`LiquidityPool::withdraw`] returns, plus
    /// [`AmmError::PoolNotFound`] and [`AmmError::Unauthorized`] if the
    /// sequence is stale or the caller does not hold `shares`.
    pub fn withdraw(
        &self,
        ctx: CallContext,
        token_a: TokenId,
        token_b: TokenId,
        shares: Shares,
    ) -> Result<WithdrawOutcome, AmmError> {
        self.admit(&ctx)?;
        let pair = TokenPair::new(token_a, token_b)?;
        self.registry.with_pool(&pair, |pool| {
            let reversed = pool.token_a() != token_a;

            let mut next = pool.clone();
            let outcome = next.withdraw(shares)?;

            let caller = ctx.caller();
            let accounts = next.accounts();
            if self.balance(accounts.share_mint(), caller) < shares.as_amount() {
                return Err(AmmError::Unauthorized("caller does not hold the shares"));
            }
            let settlement = Settlement::new(caller)
                .with_authority(accounts.authority())
                .burn(accounts.share_mint(), caller, shares.as_amount())
                .transfer(
                    next.token_a(),
                    accounts.vault(next.token_a())?,
                    caller,
                    outcome.amount_a,
                )
                .transfer(
                    next.token_b(),
                    accounts.vault(next.token_b())?,
                    caller,
                    outcome.amount_b,
                );
            self.settle(&settlement, "withdraw")?;

            *pool = next;
            debug!(
                caller = %caller,
                shares = %shares,
                amount_a = %outcome.amount_a,
                amount_b = %outcome.amount_b,
                reserve_a = %pool.reserve_a(),
                reserve_b = %pool.reserve_b(),
                "withdraw committed"
            );
            Ok(if reversed { outcome.swapped() } else { outcome })
        })
    }

    /// Sells `amount_in` of `token_in` for `token_out`.
    ///
    /// # Errors
    ///
    /// Everything [`SwapPool::swap`] returns, plus
    /// [`AmmError::IdenticalTokens`], [`AmmError::PoolNotFound`],
    /// [`AmmError::Unauthorized`] for a stale sequence, and custody errors.
    pub fn swap(
        &self,
        ctx: CallContext,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.admit(&ctx)?;
        let pair = TokenPair::new(token_in, token_out)?;
        self.registry.with_pool(&pair, |pool| {
            let mut next = pool.clone();
            let outcome = next.swap(token_in, amount_in, amount_out_min)?;

            let caller = ctx.caller();
            let accounts = next.accounts();
            let settlement = Settlement::new(caller)
                .with_authority(accounts.authority())
                .transfer(token_in, caller, accounts.vault(token_in)?, amount_in)
                .transfer(
                    token_out,
                    accounts.vault(token_out)?,
                    caller,
                    outcome.amount_out(),
                );
            self.settle(&settlement, "swap")?;

            *pool = next;
            debug!(
                caller = %caller,
                amount_in = %outcome.amount_in(),
                amount_out = %outcome.amount_out(),
                fee = %outcome.fee(),
                reserve_a = %pool.reserve_a(),
                reserve_b = %pool.reserve_b(),
                "swap committed"
            );
            Ok(outcome)
        })
    }

    // -- Queries --------------------------------------------------------------

    /// Prices a swap without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::quote_swap`], plus [`AmmError::PoolNotFound`].
    pub fn quote_swap(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let pair = TokenPair::new(token_in, token_out)?;
        self.registry
            .with_pool(&pair, |pool| pool.quote_swap(token_in, amount_in))
    }

    /// Computes what a deposit would use and mint without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::quote_deposit`], plus
    /// [`AmmError::PoolNotFound`].
    pub fn quote_deposit(
        &self,
        token_a: TokenId,
        token_b: TokenId,
        request: &DepositRequest,
    ) -> Result<DepositOutcome, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        self.registry.with_pool(&pair, |pool| {
            let reversed = pool.token_a() != token_a;
            if reversed {
                pool.quote_deposit(&request.swapped()).map(DepositOutcome::swapped)
            } else {
                pool.quote_deposit(request)
            }
        })
    }

    /// Returns a copy of the pool's current state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool exists for the pair.
    pub fn pool(&self, token_a: TokenId, token_b: TokenId) -> Result<PoolState, AmmError> {
        self.registry.snapshot(&TokenPair::new(token_a, token_b)?)
    }

    /// Checks the pool's invariants and that each vault holds exactly the
    /// pool's reserve of its token.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] on any mismatch.
    pub fn verify_reserves(&self, token_a: TokenId, token_b: TokenId) -> Result<(), AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        self.registry.with_pool(&pair, |pool| {
            pool.check_invariants()?;
            let custody = self.custody.lock();
            let accounts = pool.accounts();
            for token in [pool.token_a(), pool.token_b()] {
                let side = pool.side_of(token)?;
                let held = custody.balance(token, accounts.vault(token)?);
                if held != pool.reserve(side) {
                    warn!(
                        token = %token,
                        vault = %held,
                        reserve = %pool.reserve(side),
                        "vault balance differs from reserve"
                    );
                    return Err(AmmError::InvariantViolation(
                        "vault balance differs from reserve",
                    ));
                }
            }
            Ok(())
        })
    }

    // -- helpers --------------------------------------------------------------

    fn admit(&self, ctx: &CallContext) -> Result<(), AmmError> {
        match self.sequences.entry(ctx.caller()) {
            Entry::Occupied(mut last) => {
                if ctx.sequence() <= *last.get() {
                    warn!(
                        caller = %ctx.caller(),
                        sequence = ctx.sequence(),
                        last = *last.get(),
                        "stale call sequence"
                    );
                    return Err(AmmError::Unauthorized("call sequence must increase"));
                }
                last.insert(ctx.sequence());
            }
            Entry::Vacant(slot) => {
                slot.insert(ctx.sequence());
            }
        }
        Ok(())
    }

    fn settle(&self, settlement: &Settlement, operation: &'static str) -> Result<(), AmmError> {
        self.custody.lock().settle(settlement).inspect_err(|e| {
            warn!(operation, signer = %settlement.signer(), error = %e, "settlement rejected");
        })
    }
}
