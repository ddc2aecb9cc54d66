//! # pairswap
//!
//! Constant-product automated market maker with integer-exact settlement.
//!
//! A pool holds reserves of two tokens and prices swaps so that the product
//! of its reserves never decreases. Liquidity providers receive pool shares
//! (a per-pool share token) in proportion to what they deposit and redeem
//! them for a proportional slice of both reserves.
//!
//! Every amount is a `u64` and every intermediate product is computed in
//! `u128` with an explicit rounding direction, so results are reproducible
//! bit for bit. Rounding always favours the pool.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::custody::InMemoryCustody;
//! use pairswap::domain::{Address, Amount, CallContext, DepositRequest, Shares, TokenId};
//! use pairswap::exchange::Exchange;
//!
//! let usdc = TokenId::from_bytes([1u8; 32]);
//! let weth = TokenId::from_bytes([2u8; 32]);
//! let lp = Address::from_bytes([7u8; 32]);
//!
//! // 1. An exchange over an in-memory ledger, with the 0.3% default fee.
//! let exchange = Exchange::with_defaults(InMemoryCustody::new());
//! exchange.with_custody(|c| {
//!     c.credit(usdc, lp, Amount::new(1_000)).expect("funded");
//!     c.credit(weth, lp, Amount::new(1_000)).expect("funded");
//! });
//!
//! // 2. Create the pool and seed it.
//! let ctx = CallContext::new(lp, 1);
//! exchange.create_pool(ctx, usdc, weth).expect("created");
//! let req = DepositRequest::new(Amount::new(100), Amount::new(100)).expect("non-zero");
//! let seeded = exchange.deposit(ctx.next(), usdc, weth, req).expect("deposited");
//! assert_eq!(seeded.shares_minted, Shares::new(200));
//!
//! // 3. Redeem half of the shares.
//! let out = exchange
//!     .withdraw(ctx.next().next(), usdc, weth, Shares::new(100))
//!     .expect("withdrawn");
//! assert_eq!(out.amount_a, Amount::new(50));
//! assert_eq!(out.amount_b, Amount::new(50));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange    │  sequence check, pair orientation
//! └──────┬───────┘
//!        │ with_pool(pair)
//!        ▼
//! ┌──────────────┐
//! │ PoolRegistry  │  DashMap<TokenPair, Arc<Mutex<PoolState>>>
//! └──────┬───────┘
//!        │ quote on a copy
//!        ▼
//! ┌──────────────┐        ┌──────────────┐
//! │  PoolState    │ ─────▶ │ TokenCustody  │  settle(&Settlement)
//! └──────┬───────┘        └──────────────┘
//!        │ constant_product::*
//!        ▼
//! ┌──────────────┐
//! │     Math      │  u128 mul_div with explicit rounding
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`TokenPair`](domain::TokenPair), [`FeeRate`](domain::FeeRate), etc. |
//! | [`math`] | Checked arithmetic and the constant-product formulas |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig), [`TokenCustody`](traits::TokenCustody) |
//! | [`pools`] | [`PoolState`](pools::PoolState) and its derived [`PoolAccounts`](pools::PoolAccounts) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry), one lock per pool |
//! | [`custody`] | [`Settlement`](custody::Settlement) and [`InMemoryCustody`](custody::InMemoryCustody) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange), the entry point |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod custody;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
