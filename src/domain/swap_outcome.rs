//! Result of pricing or executing a swap.

use core::fmt;

use super::{Amount, TokenId};
use crate::error::AmmError;

/// The outcome of a swap: what went in, what came out, and the fee retained.
///
/// The same value is returned by a quote and by the executed swap, so a
/// caller can compare them directly.
///
/// # Invariants
///
/// - `amount_in > 0`. `amount_out` may be zero for a dust input.
/// - `fee <= amount_in`.
/// - `token_in != token_out`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapOutcome, TokenId};
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
/// let outcome = SwapOutcome::new(a, b, Amount::new(1_000), Amount::new(990), Amount::new(3));
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    token_in: TokenId,
    token_out: TokenId,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both tokens are the same.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InvariantViolation`] if `fee > amount_in`.
    pub fn new(
        token_in: TokenId,
        token_out: TokenId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if token_in == token_out {
            return Err(AmmError::InvalidToken("swap tokens must differ"));
        }
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in must be positive"));
        }
        if fee > amount_in {
            return Err(AmmError::InvariantViolation("fee exceeds amount_in"));
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the token paid into the pool.
    #[must_use]
    pub const fn token_in(&self) -> TokenId {
        self.token_in
    }

    /// Returns the token paid out of the pool.
    #[must_use]
    pub const fn token_out(&self) -> TokenId {
        self.token_out
    }

    /// Returns the input amount. The full amount is added to the reserve.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the portion of the input the pricing formula ignored.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn tok(byte: u8) -> TokenId {
        TokenId::from_bytes([byte; 32])
    }

    #[test]
    fn valid_outcome() {
        let Ok(o) = SwapOutcome::new(
            tok(1),
            tok(2),
            Amount::new(100_000),
            Amount::new(49_924),
            Amount::new(300),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(o.token_in(), tok(1));
        assert_eq!(o.token_out(), tok(2));
        assert_eq!(o.amount_in(), Amount::new(100_000));
        assert_eq!(o.amount_out(), Amount::new(49_924));
        assert_eq!(o.fee(), Amount::new(300));
    }

    #[test]
    fn zero_input_rejected() {
        assert!(matches!(
            SwapOutcome::new(tok(1), tok(2), Amount::ZERO, Amount::new(1), Amount::ZERO),
            Err(AmmError::ZeroAmount(_))
        ));
    }

    #[test]
    fn zero_output_allowed() {
        let Ok(o) = SwapOutcome::new(tok(1), tok(2), Amount::new(1), Amount::ZERO, Amount::new(1))
        else {
            panic!("expected Ok");
        };
        assert!(o.amount_out().is_zero());
    }

    #[test]
    fn fee_above_input_rejected() {
        let result =
            SwapOutcome::new(tok(1), tok(2), Amount::new(10), Amount::new(5), Amount::new(11));
        assert!(matches!(result, Err(AmmError::InvariantViolation(_))));
    }

    #[test]
    fn same_token_rejected() {
        let result =
            SwapOutcome::new(tok(1), tok(1), Amount::new(10), Amount::new(5), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidToken(_))));
    }

    #[test]
    fn display() {
        let Ok(o) =
            SwapOutcome::new(tok(1), tok(2), Amount::new(10), Amount::new(5), Amount::new(1))
        else {
            panic!("expected Ok");
        };
        assert_eq!(o.to_string(), "SwapOutcome(in=10, out=5, fee=1)");
    }
}
