//! Deposit and withdrawal accounting.
//!
//! # Deposit (into a funded pool)
//!
//! 1. `b_required = ⌈a_desired · reserve_b / reserve_a⌉`
//! 2. If `b_required ≤ b_desired` use `(a_desired, b_required)`, otherwise
//!    use `(⌈b_desired · reserve_a / reserve_b⌉, b_desired)`
//! 3. `minted = min(⌊a · S / reserve_a⌋, ⌊b · S / reserve_b⌋)`
//!
//! The first deposit into an empty pool uses both desired amounts as-is
//! and mints `a + b` shares.
//!
//! # Withdraw
//!
//! `amount_x = ⌊shares · reserve_x / S⌋`. Dust stays in the pool.

use super::PoolState;
use crate::domain::{Amount, DepositOutcome, DepositRequest, Shares, WithdrawOutcome};
use crate::error::AmmError;
use crate::math::constant_product::{bootstrap_shares, match_ratio, proportional_shares, redeem};
use crate::math::CheckedArithmetic;
use crate::traits::LiquidityPool;

/// Post-state of a priced deposit or withdrawal.
struct Transition<O> {
    outcome: O,
    reserve_a: Amount,
    reserve_b: Amount,
    share_supply: Shares,
}

impl PoolState {
    fn plan_deposit(
        &self,
        request: &DepositRequest,
    ) -> Result<Transition<DepositOutcome>, AmmError> {
        let a_desired = request.amount_a_desired();
        let b_desired = request.amount_b_desired();
        if a_desired.is_zero() || b_desired.is_zero() {
            return Err(AmmError::ZeroDeposit("both desired amounts must be positive"));
        }

        let bootstrap = self.share_supply.is_zero();
        let (amount_a, amount_b) = if bootstrap {
            (a_desired, b_desired)
        } else {
            match_ratio(a_desired, b_desired, self.reserve_a, self.reserve_b)?
        };

        if amount_a < request.amount_a_min() {
            return Err(AmmError::SlippageExceeded("token A below minimum"));
        }
        if amount_b < request.amount_b_min() {
            return Err(AmmError::SlippageExceeded("token B below minimum"));
        }

        let shares_minted = if bootstrap {
            bootstrap_shares(amount_a, amount_b)?
        } else {
            proportional_shares(
                amount_a,
                amount_b,
                self.reserve_a,
                self.reserve_b,
                self.share_supply,
            )?
        };
        if shares_minted.is_zero() {
            return Err(AmmError::ZeroDeposit("deposit too small to mint a share"));
        }

        Ok(Transition {
            outcome: DepositOutcome {
                amount_a,
                amount_b,
                shares_minted,
            },
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
            share_supply: self.share_supply.safe_add(&shares_minted)?,
        })
    }

    fn plan_withdraw(&self, shares: Shares) -> Result<Transition<WithdrawOutcome>, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InsufficientShares("cannot burn zero shares"));
        }
        if shares > self.share_supply {
            return Err(AmmError::InsufficientShares("burn exceeds share supply"));
        }

        let amount_a = redeem(shares, self.reserve_a, self.share_supply)?;
        let amount_b = redeem(shares, self.reserve_b, self.share_supply)?;

        Ok(Transition {
            outcome: WithdrawOutcome {
                amount_a,
                amount_b,
                shares_burned: shares,
            },
            reserve_a: self.reserve_a.safe_sub(&amount_a)?,
            reserve_b: self.reserve_b.safe_sub(&amount_b)?,
            share_supply: self.share_supply.safe_sub(&shares)?,
        })
    }

    fn commit<O: Copy>(&mut self, transition: &Transition<O>) -> O {
        self.reserve_a = transition.reserve_a;
        self.reserve_b = transition.reserve_b;
        self.share_supply = transition.share_supply;
        transition.outcome
    }
}

impl LiquidityPool for PoolState {
    fn quote_deposit(&self, request: &DepositRequest) -> Result<DepositOutcome, AmmError> {
        self.plan_deposit(request).map(|t| t.outcome)
    }

    fn deposit(&mut self, request: &DepositRequest) -> Result<DepositOutcome, AmmError> {
        let transition = self.plan_deposit(request)?;
        Ok(self.commit(&transition))
    }

    fn quote_withdraw(&self, shares: Shares) -> Result<WithdrawOutcome, AmmError> {
        self.plan_withdraw(shares).map(|t| t.outcome)
    }

    fn withdraw(&mut self, shares: Shares) -> Result<WithdrawOutcome, AmmError> {
        let transition = self.plan_withdraw(shares)?;
        Ok(self.commit(&transition))
    }

    fn share_supply(&self) -> Shares {
        self.share_supply
    }
}
