//! Caller identity attached to every mutating exchange call.

use super::Address;

/// Who is calling and which call this is.
///
/// `sequence` must strictly increase per caller; the exchange rejects a
/// replayed or reordered call with
/// [`AmmError::Unauthorized`](crate::error::AmmError::Unauthorized).
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, CallContext};
///
/// let alice = Address::from_bytes([7u8; 32]);
/// let ctx = CallContext::new(alice, 1);
/// assert_eq!(ctx.next().sequence(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: Address,
    sequence: u64,
}

impl CallContext {
    /// Creates a new context.
    #[must_use]
    pub const fn new(caller: Address, sequence: u64) -> Self {
        Self { caller, sequence }
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Returns the call's sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the context for the caller's following call.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            caller: self.caller,
            sequence: self.sequence.saturating_add(1),
        }
    }
}
