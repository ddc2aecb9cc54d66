//! Deposit requests and the outcomes of liquidity changes.

use core::fmt;

use super::{Amount, Shares};
use crate::error::AmmError;

/// A liquidity deposit as the provider expresses it: the most they are
/// willing to add of each token, and the least they will accept being used.
///
/// Amounts are in the pool's stored token order (`token_a`, `token_b`).
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, DepositRequest};
///
/// let req = DepositRequest::new(Amount::new(20), Amount::new(20))
///     .expect("non-zero")
///     .with_minimums(Amount::new(15), Amount::new(5));
/// assert_eq!(req.amount_b_min(), Amount::new(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositRequest {
    amount_a_desired: Amount,
    amount_b_desired: Amount,
    amount_a_min: Amount,
    amount_b_min: Amount,
}

impl DepositRequest {
    /// Creates a request with no slippage bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroDeposit`] if either desired amount is zero.
    pub const fn new(
        amount_a_desired: Amount,
        amount_b_desired: Amount,
    ) -> crate::error::Result<Self> {
        if amount_a_desired.is_zero() || amount_b_desired.is_zero() {
            return Err(AmmError::ZeroDeposit("both desired amounts must be positive"));
        }
        Ok(Self {
            amount_a_desired,
            amount_b_desired,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
        })
    }

    /// Sets the minimum amounts that must be used.
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// Returns the most of token A the provider will add.
    pub const fn amount_a_desired(&self) -> Amount {
        self.amount_a_desired
    }

    /// Returns the most of token B the provider will add.
    pub const fn amount_b_desired(&self) -> Amount {
        self.amount_b_desired
    }

    /// Returns the least of token A that must be used.
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Returns the least of token B that must be used.
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// Returns the request with both sides exchanged.
    pub(crate) const fn swapped(self) -> Self {
        Self {
            amount_a_desired: self.amount_b_desired,
            amount_b_desired: self.amount_a_desired,
            amount_a_min: self.amount_b_min,
            amount_b_min: self.amount_a_min,
        }
    }
}

/// What a deposit actually took and minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    /// Token A moved into the pool.
    pub amount_a: Amount,
    /// Token B moved into the pool.
    pub amount_b: Amount,
    /// Shares minted to the provider.
    pub shares_minted: Shares,
}

impl DepositOutcome {
    pub(crate) const fn swapped(self) -> Self {
        Self {
            amount_a: self.amount_b,
            amount_b: self.amount_a,
            shares_minted: self.shares_minted,
        }
    }
}

impl fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, shares={})",
            self.amount_a, self.amount_b, self.shares_minted
        )
    }
}

/// What a withdrawal paid out for the burned shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawOutcome {
    /// Token A paid out.
    pub amount_a: Amount,
    /// Token B paid out.
    pub amount_b: Amount,
    /// Shares burned.
    pub shares_burned: Shares,
}

impl WithdrawOutcome {
    pub(crate) const fn swapped(self) -> Self {
        Self {
            amount_a: self.amount_b,
            amount_b: self.amount_a,
            shares_burned: self.shares_burned,
        }
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(a={}, b={}, shares={})",
            self.amount_a, self.amount_b, self.shares_burned
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_zero_side() {
        assert!(matches!(
            DepositRequest::new(Amount::ZERO, Amount::new(1)),
            Err(AmmError::ZeroDeposit(_))
        ));
        assert!(matches!(
            DepositRequest::new(Amount::new(1), Amount::ZERO),
            Err(AmmError::ZeroDeposit(_))
        ));
    }

    #[test]
    fn request_defaults_to_no_minimums() {
        let Ok(req) = DepositRequest::new(Amount::new(5), Amount::new(7)) else {
            panic!("expected Ok");
        };
        assert_eq!(req.amount_a_min(), Amount::ZERO);
        assert_eq!(req.amount_b_min(), Amount::ZERO);
    }

    #[test]
    fn request_swapped_exchanges_sides() {
        let Ok(req) = DepositRequest::new(Amount::new(5), Amount::new(7)) else {
            panic!("expected Ok");
        };
        let flipped = req.with_minimums(Amount::new(1), Amount::new(2)).swapped();
        assert_eq!(flipped.amount_a_desired(), Amount::new(7));
        assert_eq!(flipped.amount_b_desired(), Amount::new(5));
        assert_eq!(flipped.amount_a_min(), Amount::new(2));
        assert_eq!(flipped.amount_b_min(), Amount::new(1));
    }

    #[test]
    fn outcomes_swap_and_display() {
        let d = DepositOutcome {
            amount_a: Amount::new(20),
            amount_b: Amount::new(10),
            shares_minted: Shares::new(30),
        };
        assert_eq!(d.swapped().amount_a, Amount::new(10));
        assert_eq!(d.to_string(), "Deposit(a=20, b=10, shares=30)");

        let w = WithdrawOutcome {
            amount_a: Amount::new(50),
            amount_b: Amount::new(49),
            shares_burned: Shares::new(100),
        };
        assert_eq!(w.swapped().amount_b, Amount::new(50));
        assert_eq!(w.to_string(), "Withdraw(a=50, b=49, shares=100)");
    }
}
