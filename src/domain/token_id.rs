//! Opaque token identifier.

use core::fmt;

/// An opaque, chain-agnostic token identifier (a mint address).
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid, so construction is infallible. Ordering is lexicographic on the
/// bytes and is what gives [`TokenPair`](super::TokenPair) its canonical
/// order.
///
/// # Examples
///
/// ```
/// use pairswap::domain::TokenId;
///
/// let id = TokenId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId([u8; 32]);

impl TokenId {
    /// Creates a `TokenId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", hex::encode(&self.0[..4]))
    }
}
