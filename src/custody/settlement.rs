//! Token movements a pool operation needs custody to execute.

use core::fmt;

use crate::domain::{Address, Amount, TokenId};
use crate::pools::PoolAuthority;

/// One balance change executed by custody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Move `amount` of `token` from one holder to another.
    Transfer {
        /// Token moved.
        token: TokenId,
        /// Debited holder.
        from: Address,
        /// Credited holder.
        to: Address,
        /// Amount moved.
        amount: Amount,
    },
    /// Create `amount` of a share token and credit it to `to`.
    Mint {
        /// Share token minted.
        token: TokenId,
        /// Credited holder.
        to: Address,
        /// Amount minted.
        amount: Amount,
    },
    /// Destroy `amount` of a share token held by `from`.
    Burn {
        /// Share token burned.
        token: TokenId,
        /// Debited holder.
        from: Address,
        /// Amount burned.
        amount: Amount,
    },
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer {
                token,
                from,
                to,
                amount,
            } => write!(f, "Transfer({amount} {token:?}: {from:?} -> {to:?})"),
            Self::Mint { token, to, amount } => write!(f, "Mint({amount} {token:?} -> {to:?})"),
            Self::Burn {
                token,
                from,
                amount,
            } => write!(f, "Burn({amount} {token:?} from {from:?})"),
        }
    }
}

/// An ordered batch of movements that custody applies all-or-nothing.
///
/// `signer` authorizes debits from its own accounts. `authority`, when
/// present, authorizes debits from the vaults and mints of the pool it
/// belongs to; only the crate can attach one.
///
/// Zero-amount movements are dropped when added.
///
/// # Examples
///
/// ```
/// use pairswap::custody::Settlement;
/// use pairswap::domain::{Address, Amount, TokenId};
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let bob = Address::from_bytes([2u8; 32]);
/// let token = TokenId::from_bytes([9u8; 32]);
///
/// let s = Settlement::new(alice)
///     .transfer(token, alice, bob, Amount::new(5))
///     .transfer(token, alice, bob, Amount::ZERO);
/// assert_eq!(s.movements().len(), 1);
/// assert!(s.authority().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    signer: Address,
    authority: Option<PoolAuthority>,
    movements: Vec<Movement>,
}

impl Settlement {
    /// Starts an empty settlement signed by `signer`.
    #[must_use]
    pub const fn new(signer: Address) -> Self {
        Self {
            signer,
            authority: None,
            movements: Vec::new(),
        }
    }

    pub(crate) fn with_authority(mut self, authority: &PoolAuthority) -> Self {
        self.authority = Some(authority.clone());
        self
    }

    /// Appends a transfer.
    #[must_use]
    pub fn transfer(self, token: TokenId, from: Address, to: Address, amount: Amount) -> Self {
        self.push(Movement::Transfer {
            token,
            from,
            to,
            amount,
        })
    }

    /// Appends a mint.
    #[must_use]
    pub fn mint(self, token: TokenId, to: Address, amount: Amount) -> Self {
        self.push(Movement::Mint { token, to, amount })
    }

    /// Appends a burn.
    #[must_use]
    pub fn burn(self, token: TokenId, from: Address, amount: Amount) -> Self {
        self.push(Movement::Burn {
            token,
            from,
            amount,
        })
    }

    fn push(mut self, movement: Movement) -> Self {
        let amount = match movement {
            Movement::Transfer { amount, .. }
            | Movement::Mint { amount, .. }
            | Movement::Burn { amount, .. } => amount,
        };
        if !amount.is_zero() {
            self.movements.push(movement);
        }
        self
    }

    /// Returns the account that signed the settlement.
    #[must_use]
    pub const fn signer(&self) -> Address {
        self.signer
    }

    /// Returns the attached pool authority, if any.
    #[must_use]
    pub const fn authority(&self) -> Option<&PoolAuthority> {
        self.authority.as_ref()
    }

    /// Returns the movements in execution order.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Returns `true` if there is nothing to execute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenPair;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    fn tok(byte: u8) -> TokenId {
        TokenId::from_bytes([byte; 32])
    }

    #[test]
    fn builds_in_order() {
        let s = Settlement::new(addr(1))
            .transfer(tok(1), addr(1), addr(2), Amount::new(3))
            .mint(tok(2), addr(1), Amount::new(4))
            .burn(tok(2), addr(1), Amount::new(1));
        assert_eq!(s.signer(), addr(1));
        assert_eq!(s.movements().len(), 3);
        assert!(matches!(s.movements()[1], Movement::Mint { .. }));
        assert!(!s.is_empty());
    }

    #[test]
    fn zero_movements_are_dropped() {
        let s = Settlement::new(addr(1))
            .mint(tok(2), addr(1), Amount::ZERO)
            .burn(tok(2), addr(1), Amount::ZERO);
        assert!(s.is_empty());
    }

    #[test]
    fn authority_is_attached() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("valid pair");
        };
        let authority = PoolAuthority::for_pair(&pair);
        let s = Settlement::new(addr(1)).with_authority(&authority);
        assert_eq!(s.authority(), Some(&authority));
    }

    #[test]
    fn display_movement() {
        let m = Movement::Mint {
            token: tok(1),
            to: addr(2),
            amount: Amount::new(7),
        };
        assert_eq!(m.to_string(), "Mint(7 TokenId(01010101) -> Address(02020202))");
    }
}
