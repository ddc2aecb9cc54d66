//! Unordered pair of distinct tokens.

use super::TokenId;
use crate::error::AmmError;

/// An unordered pair of distinct tokens, canonically sorted by id.
///
/// The canonical ordering guarantees `first() < second()`, so `(A, B)` and
/// `(B, A)` build equal values. This is the identity under which the
/// [`PoolRegistry`](crate::registry::PoolRegistry) stores pools and from
/// which pool accounts are derived.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{TokenId, TokenPair};
///
/// let a = TokenId::from_bytes([1u8; 32]);
/// let b = TokenId::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// assert_eq!(pair, TokenPair::new(a, b).expect("distinct tokens"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPair {
    first: TokenId,
    second: TokenId,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if both ids are equal.
    pub fn new(token1: TokenId, token2: TokenId) -> Result<Self, AmmError> {
        if token1 == token2 {
            return Err(AmmError::IdenticalTokens);
        }
        let (first, second) = if token1 < token2 {
            (token1, token2)
        } else {
            (token2, token1)
        };
        Ok(Self { first, second })
    }

    /// Returns the token with the lower id.
    #[must_use]
    pub const fn first(&self) -> TokenId {
        self.first
    }

    /// Returns the token with the higher id.
    #[must_use]
    pub const fn second(&self) -> TokenId {
        self.second
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenId) -> bool {
        self.first == *token || self.second == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &TokenId) -> Result<TokenId, AmmError> {
        if *token == self.first {
            Ok(self.second)
        } else if *token == self.second {
            Ok(self.first)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
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
    fn keeps_sorted_input() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), tok(1));
        assert_eq!(pair.second(), tok(2));
    }

    #[test]
    fn sorts_reversed_input() {
        let Ok(pair) = TokenPair::new(tok(2), tok(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), tok(1));
        assert_eq!(pair.second(), tok(2));
    }

    #[test]
    fn rejects_identical_tokens() {
        assert_eq!(TokenPair::new(tok(1), tok(1)), Err(AmmError::IdenticalTokens));
    }

    #[test]
    fn unordered_equality() {
        assert_eq!(TokenPair::new(tok(1), tok(2)), TokenPair::new(tok(2), tok(1)));
    }

    #[test]
    fn contains_and_other() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&tok(1)));
        assert!(pair.contains(&tok(2)));
        assert!(!pair.contains(&tok(3)));
        assert_eq!(pair.other(&tok(1)), Ok(tok(2)));
        assert_eq!(pair.other(&tok(2)), Ok(tok(1)));
        assert!(matches!(pair.other(&tok(3)), Err(AmmError::InvalidToken(_))));
    }
}
