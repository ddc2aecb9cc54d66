//! Swap pricing and reserve update.
//!
//! # Swap Algorithm (token in → token out)
//!
//! 1. `amount_out = ⌊amount_in·n · reserve_out / (reserve_in·d + amount_in·n)⌋`
//! 2. `reserve_in += amount_in` (the fee stays in the pool)
//! 3. `reserve_out -= amount_out`
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases reserves without a corresponding output. The check runs on
//! every swap and rejects the trade if it ever fails.

use super::state::Side;
use super::PoolState;
use crate::domain::{Amount, FeeRate, SwapOutcome, TokenId, TokenPair};
use crate::error::AmmError;
use crate::math::constant_product::{product, swap_fee, swap_output};
use crate::math::CheckedArithmetic;
use crate::traits::SwapPool;

struct SwapPlan {
    side_in: Side,
    outcome: SwapOutcome,
    reserve_in: Amount,
    reserve_out: Amount,
    fees_in: Amount,
}

impl PoolState {
    fn plan_swap(&self, token_in: TokenId, amount_in: Amount) -> Result<SwapPlan, AmmError> {
        let side_in = self.side_of(token_in)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in must be positive"));
        }

        let side_out = side_in.other();
        let reserve_in = self.reserve(side_in);
        let reserve_out = self.reserve(side_out);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::EmptyPool);
        }

        // A dust input may buy nothing; the caller's minimum decides.
        let amount_out = swap_output(amount_in, reserve_in, reserve_out, self.fee_rate)?;
        let fee = swap_fee(amount_in, self.fee_rate)?;

        let new_reserve_in = reserve_in.safe_add(&amount_in)?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;
        let fees_in = self.accumulated_fees(side_in).safe_add(&fee)?;
        if product(new_reserve_in, new_reserve_out) < product(reserve_in, reserve_out) {
            return Err(AmmError::InvariantViolation("reserve product decreased"));
        }

        let outcome = SwapOutcome::new(
            token_in,
            self.token(side_out),
            amount_in,
            amount_out,
            fee,
        )?;
        Ok(SwapPlan {
            side_in,
            outcome,
            reserve_in: new_reserve_in,
            reserve_out: new_reserve_out,
            fees_in,
        })
    }
}

impl SwapPool for PoolState {
    fn quote_swap(&self, token_in: TokenId, amount_in: Amount) -> Result<SwapOutcome, AmmError> {
        self.plan_swap(token_in, amount_in).map(|plan| plan.outcome)
    }

    fn swap(
        &mut self,
        token_in: TokenId,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let plan = self.plan_swap(token_in, amount_in)?;
        if plan.outcome.amount_out() < amount_out_min {
            return Err(AmmError::SlippageExceeded("output below minimum"));
        }

        self.set_reserve(plan.side_in, plan.reserve_in);
        self.set_reserve(plan.side_in.other(), plan.reserve_out);
        self.set_accumulated_fees(plan.side_in, plan.fees_in);
        Ok(plan.outcome)
    }

    fn token_pair(&self) -> TokenPair {
        self.accounts.pair()
    }

    fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::{Decimals, DepositRequest};
    use crate::traits::{FromConfig, LiquidityPool};

    fn amt(v: u64) -> Amount {
        Amount::new(v)
    }

    fn tok(byte: u8) -> TokenId {
        TokenId::from_bytes([byte; 32])
    }

    fn pool_with(ra: u64, rb: u64, fee_rate: FeeRate) -> PoolState {
        let Ok(cfg) = PoolConfig::new(tok(1), tok(2), fee_rate, Decimals::SHARE_DEFAULT) else {
            panic!("valid config");
        };
        let Ok(mut pool) = PoolState::from_config(&cfg) else {
            panic!("valid pool");
        };
        if ra > 0 && rb > 0 {
            let Ok(req) = DepositRequest::new(amt(ra), amt(rb)) else {
                panic!("valid request");
            };
            let Ok(_) = pool.deposit(&req) else {
                panic!("bootstrap");
            };
        }
        pool
    }

    fn pool(ra: u64, rb: u64) -> PoolState {
        pool_with(ra, rb, FeeRate::STANDARD)
    }

    // -- Pricing ------------------------------------------------------------

    #[test]
    fn equal_reserves_full_reserve_input() {
        let mut p = pool(100_000, 100_000);
        let Ok(out) = p.swap(tok(1), amt(100_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), amt(49_924));
        assert_eq!(out.fee(), amt(300));
        assert_eq!(out.token_out(), tok(2));
        assert_eq!(p.reserve_a(), amt(200_000));
        assert_eq!(p.reserve_b(), amt(50_076));
        assert_eq!(p.accumulated_fees_a(), amt(300));
    }

    #[test]
    fn swap_b_to_a_updates_other_side() {
        let mut p = pool(100_000, 100_000);
        let Ok(out) = p.swap(tok(2), amt(100_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.token_in(), tok(2));
        assert_eq!(out.token_out(), tok(1));
        assert_eq!(p.reserve_a(), amt(50_076));
        assert_eq!(p.reserve_b(), amt(200_000));
        assert_eq!(p.accumulated_fees_b(), amt(300));
    }

    #[test]
    fn zero_fee_rate_prices_whole_input() {
        let mut p = pool_with(100, 100, FeeRate::ZERO_FEE);
        let Ok(out) = p.swap(tok(1), amt(100), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), amt(50));
        assert_eq!(out.fee(), Amount::ZERO);
    }

    #[test]
    fn shares_unchanged_by_swap() {
        let mut p = pool(1_000, 1_000);
        let Ok(_) = p.swap(tok(1), amt(10), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(p.share_supply().get(), 2_000);
    }

    #[test]
    fn product_never_decreases() {
        let mut p = pool(12_345, 67_890);
        for (tok_byte, amount) in [(1u8, 1_000u64), (2, 777), (1, 5), (2, 40_000)] {
            let k_before = product(p.reserve_a(), p.reserve_b());
            let Ok(_) = p.swap(tok(tok_byte), amt(amount), Amount::ZERO) else {
                panic!("expected Ok");
            };
            assert!(product(p.reserve_a(), p.reserve_b()) >= k_before);
        }
    }

    // -- Errors -------------------------------------------------------------

    #[test]
    fn foreign_token_rejected() {
        let mut p = pool(100, 100);
        assert!(matches!(
            p.swap(tok(9), amt(10), Amount::ZERO),
            Err(AmmError::InvalidToken(_))
        ));
    }

    #[test]
    fn zero_input_rejected() {
        let mut p = pool(100, 100);
        assert!(matches!(
            p.swap(tok(1), Amount::ZERO, Amount::ZERO),
            Err(AmmError::ZeroAmount(_))
        ));
    }

    #[test]
    fn empty_pool_rejected() {
        let mut p = pool(0, 0);
        assert_eq!(p.swap(tok(1), amt(10), Amount::ZERO), Err(AmmError::EmptyPool));
    }

    #[test]
    fn dust_input_with_minimum_hits_slippage() {
        let mut p = pool(1_000_000, 1_000);
        let before = p.clone();
        assert!(matches!(
            p.swap(tok(1), amt(1), amt(1)),
            Err(AmmError::SlippageExceeded(_))
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn dust_input_without_minimum_is_kept() {
        let mut p = pool(1_000_000, 1_000);
        let k_before = product(p.reserve_a(), p.reserve_b());
        let Ok(out) = p.swap(tok(1), amt(1), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), Amount::ZERO);
        assert_eq!(out.fee(), amt(1));
        assert_eq!(p.reserve_a(), amt(1_000_001));
        assert_eq!(p.reserve_b(), amt(1_000));
        assert!(product(p.reserve_a(), p.reserve_b()) > k_before);
    }

    #[test]
    fn fee_counter_overflow_rejected() {
        let mut p = pool(1_000, 1_000);
        p.accumulated_fees_a = Amount::MAX;
        let before = p.clone();
        assert!(matches!(
            p.swap(tok(1), amt(1_000), Amount::ZERO),
            Err(AmmError::ArithmeticOverflow(_))
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn slippage_rejected_without_change() {
        let mut p = pool(100_000, 100_000);
        let before = p.clone();
        assert!(matches!(
            p.swap(tok(1), amt(100_000), amt(49_925)),
            Err(AmmError::SlippageExceeded(_))
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn slippage_bound_is_inclusive() {
        let mut p = pool(100_000, 100_000);
        assert!(p.swap(tok(1), amt(100_000), amt(49_924)).is_ok());
    }

    #[test]
    fn reserve_overflow_rejected() {
        let mut p = pool(u64::MAX / 2, 1_000);
        let result = p.swap(tok(1), amt(u64::MAX / 2 + 2), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::ArithmeticOverflow(_))));
    }

    // -- Quotes and accessors -----------------------------------------------

    #[test]
    fn quote_matches_swap_and_has_no_effect() {
        let p = pool(5_000, 9_000);
        let before = p.clone();
        let Ok(quote) = p.quote_swap(tok(2), amt(321)) else {
            panic!("expected Ok");
        };
        assert_eq!(p, before);
        let mut committed = p.clone();
        let Ok(actual) = committed.swap(tok(2), amt(321), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(quote, actual);
    }

    #[test]
    fn pair_and_fee_accessors() {
        let p = pool(1, 1);
        assert_eq!(p.token_pair().first(), tok(1));
        assert_eq!(p.fee_rate(), FeeRate::STANDARD);
    }
}
