//! Account address for holders, vaults, and authorities.

use core::fmt;

/// A 32-byte account address.
///
/// Identifies who holds a balance in custody: a user wallet, a pool vault,
/// or a pool authority. Addresses derived by the engine (see
/// [`PoolAccounts`](crate::pools::PoolAccounts)) have no private key behind
/// them.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Address;
///
/// let alice = Address::from_bytes([7u8; 32]);
/// assert_eq!(alice.as_bytes(), [7u8; 32]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
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

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..4]))
    }
}
