//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Invariant preservation**: `reserve_a · reserve_b` never decreases
//!    across a swap.
//! 3. **Output monotonicity**: a larger input never buys less.
//! 4. **Liquidity round-trip**: deposit at ratio then withdraw the minted
//!    shares returns ≤ what was deposited on each side.
//! 5. **Supply consistency**: `share_supply == 0 ⇔ reserves == 0` after
//!    any operation sequence.
//! 6. **Quote fidelity**: a quote equals the committed result.

use proptest::prelude::*;

use super::PoolState;
use crate::config::PoolConfig;
use crate::domain::{Amount, Decimals, DepositRequest, FeeRate, Shares, TokenId};
use crate::math::constant_product::product;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> TokenId {
    TokenId::from_bytes([1u8; 32])
}

fn tok_b() -> TokenId {
    TokenId::from_bytes([2u8; 32])
}

fn make_pool(ra: u64, rb: u64) -> PoolState {
    let Ok(cfg) = PoolConfig::new(tok_a(), tok_b(), FeeRate::STANDARD, Decimals::SHARE_DEFAULT)
    else {
        panic!("valid config");
    };
    let Ok(mut pool) = PoolState::from_config(&cfg) else {
        panic!("valid pool");
    };
    let Ok(req) = DepositRequest::new(Amount::new(ra), Amount::new(rb)) else {
        panic!("valid request");
    };
    let Ok(_) = pool.deposit(&req) else {
        panic!("bootstrap deposit");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

/// Trade and deposit sizes from dust to several times a reserve.
fn amount_strategy() -> impl Strategy<Value = u64> {
    1u64..=50_000_000u64
}

#[derive(Debug, Clone, Copy)]
enum Op {
    SwapA(u64),
    SwapB(u64),
    Deposit(u64, u64),
    Withdraw(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount_strategy().prop_map(Op::SwapA),
        amount_strategy().prop_map(Op::SwapB),
        (amount_strategy(), amount_strategy()).prop_map(|(a, b)| Op::Deposit(a, b)),
        (1u64..=30_000_000u64).prop_map(Op::Withdraw),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);

        let Ok(ab) = pool.swap(tok_a(), Amount::new(swap_in), Amount::ZERO) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap(tok_b(), ab.amount_out(), Amount::ZERO) else {
            return Ok(());
        };

        prop_assert!(
            ba.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            ba.amount_out(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in proptest::collection::vec((any::<bool>(), amount_strategy()), 1..10),
    ) {
        let mut pool = make_pool(ra, rb);

        for (a_to_b, amount) in trades {
            let token_in = if a_to_b { tok_a() } else { tok_b() };
            let k_before = product(pool.reserve_a(), pool.reserve_b());
            if pool.swap(token_in, Amount::new(amount), Amount::ZERO).is_err() {
                continue;
            }
            let k_after = product(pool.reserve_a(), pool.reserve_b());
            prop_assert!(
                k_after >= k_before,
                "k should grow from fees: k_after={} < k_before={}",
                k_after, k_before
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Output Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_monotonicity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in amount_strategy(),
        extra in amount_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let large = small.saturating_add(extra);

        let (Ok(q_small), Ok(q_large)) = (
            pool.quote_swap(tok_a(), Amount::new(small)),
            pool.quote_swap(tok_a(), Amount::new(large)),
        ) else {
            return Ok(());
        };

        prop_assert!(q_large.amount_out() >= q_small.amount_out());
        prop_assert!(q_large.fee() >= q_small.fee());
        prop_assert!(q_large.amount_out() < pool.reserve_b());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Liquidity Round-Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_round_trip(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
        skew in proptest::option::of(amount_strategy()),
    ) {
        let mut pool = make_pool(ra, rb);
        if let Some(trade) = skew {
            let _ = pool.swap(tok_a(), Amount::new(trade), Amount::ZERO);
        }

        let Ok(req) = DepositRequest::new(Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(dep) = pool.deposit(&req) else {
            return Ok(());
        };
        let Ok(wd) = pool.withdraw(dep.shares_minted) else {
            return Err(TestCaseError::fail("withdrawing freshly minted shares must succeed"));
        };

        prop_assert!(dep.amount_a.get() <= da && dep.amount_b.get() <= db);
        prop_assert!(
            wd.amount_a <= dep.amount_a,
            "token A round-trip gained: {} > {}", wd.amount_a, dep.amount_a
        );
        prop_assert!(
            wd.amount_b <= dep.amount_b,
            "token B round-trip gained: {} > {}", wd.amount_b, dep.amount_b
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5 & 6: Supply Consistency and Quote Fidelity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_supply_consistency_and_quote_fidelity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..16),
    ) {
        let mut pool = make_pool(ra, rb);

        for op in ops {
            let before = pool.clone();
            match op {
                Op::SwapA(x) | Op::SwapB(x) => {
                    let token_in = if matches!(op, Op::SwapA(_)) { tok_a() } else { tok_b() };
                    let quote = pool.quote_swap(token_in, Amount::new(x));
                    let result = pool.swap(token_in, Amount::new(x), Amount::ZERO);
                    prop_assert_eq!(quote, result);
                }
                Op::Deposit(a, b) => {
                    let Ok(req) = DepositRequest::new(Amount::new(a), Amount::new(b)) else {
                        continue;
                    };
                    let quote = pool.quote_deposit(&req);
                    let result = pool.deposit(&req);
                    prop_assert_eq!(quote, result);
                }
                Op::Withdraw(s) => {
                    let shares = Shares::new(s.min(pool.share_supply().get()));
                    let quote = pool.quote_withdraw(shares);
                    let result = pool.withdraw(shares);
                    prop_assert_eq!(quote, result);
                }
            }
            if pool != before {
                prop_assert!(pool.check_invariants().is_ok(), "inconsistent pool: {}", pool);
            }
        }
    }
}
