//! Settlement of pool operations against a token ledger.
//!
//! A pool operation produces a [`Settlement`]: an ordered list of
//! [`Movement`]s plus the signatures that authorize them. A
//! [`TokenCustody`](crate::traits::TokenCustody) applies it
//! all-or-nothing. [`InMemoryCustody`] is the reference ledger.

mod memory;
mod settlement;

pub use memory::InMemoryCustody;
pub use settlement::{Movement, Settlement};
