//! Deterministic pool accounts.
//!
//! Every pool owns two vaults and a share-token mint. None of them has key
//! material: their addresses are Keccak-256 digests of fixed seeds, so any
//! party can recompute them from the token pair alone.
//!
//! | Account | Seed |
//! |---------|------|
//! | pool authority | `"pool" ‖ first ‖ second` |
//! | vault of token `t` | `t ‖ authority` |
//! | share mint | `authority` |
//!
//! where `first < second` is the canonical order of the pair.

use sha3::{Digest, Keccak256};

use crate::domain::{Address, TokenId, TokenPair};
use crate::error::AmmError;

const POOL_SEED: &[u8] = b"pool";

fn derive(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The capability a pool uses to move funds out of its own vaults and to
/// mint shares.
///
/// Only this crate can construct one. Custody accepts a debit from a vault,
/// or a mint of a share token, only when the settlement carries the
/// authority that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolAuthority {
    address: Address,
}

impl PoolAuthority {
    pub(crate) fn for_pair(pair: &TokenPair) -> Self {
        let address = derive(&[
            POOL_SEED,
            &pair.first().as_bytes(),
            &pair.second().as_bytes(),
        ]);
        Self {
            address: Address::from_bytes(address),
        }
    }

    /// Returns the authority's address, which owns the vaults.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }
}

/// The accounts that belong to one pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolAccounts {
    pair: TokenPair,
    authority: PoolAuthority,
    vault_first: Address,
    vault_second: Address,
    share_mint: TokenId,
}

impl PoolAccounts {
    /// Derives all accounts of the pool over `pair`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairswap::domain::{TokenId, TokenPair};
    /// use pairswap::pools::PoolAccounts;
    ///
    /// let a = TokenId::from_bytes([1u8; 32]);
    /// let b = TokenId::from_bytes([2u8; 32]);
    /// let ab = PoolAccounts::derive(TokenPair::new(a, b).expect("distinct"));
    /// let ba = PoolAccounts::derive(TokenPair::new(b, a).expect("distinct"));
    /// assert_eq!(ab, ba);
    /// ```
    #[must_use]
    pub fn derive(pair: TokenPair) -> Self {
        let authority = PoolAuthority::for_pair(&pair);
        let pool = authority.address().as_bytes();
        let vault_first = derive(&[&pair.first().as_bytes(), &pool]);
        let vault_second = derive(&[&pair.second().as_bytes(), &pool]);
        let share_mint = derive(&[&pool]);
        Self {
            pair,
            authority,
            vault_first: Address::from_bytes(vault_first),
            vault_second: Address::from_bytes(vault_second),
            share_mint: TokenId::from_bytes(share_mint),
        }
    }

    /// Returns the pair these accounts were derived from.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// Returns the address of the pool authority.
    #[must_use]
    pub const fn authority_address(&self) -> Address {
        self.authority.address()
    }

    pub(crate) const fn authority(&self) -> &PoolAuthority {
        &self.authority
    }

    /// Returns the vault holding `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn vault(&self, token: TokenId) -> Result<Address, AmmError> {
        if token == self.pair.first() {
            Ok(self.vault_first)
        } else if token == self.pair.second() {
            Ok(self.vault_second)
        } else {
            Err(AmmError::InvalidToken("token has no vault in this pool"))
        }
    }

    /// Returns both vaults with their tokens, in canonical order.
    #[must_use]
    pub const fn vaults(&self) -> [(TokenId, Address); 2] {
        [
            (self.pair.first(), self.vault_first),
            (self.pair.second(), self.vault_second),
        ]
    }

    /// Returns the id of the pool's share token.
    #[must_use]
    pub const fn share_mint(&self) -> TokenId {
        self.share_mint
    }
}
