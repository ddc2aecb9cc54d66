//! The boundary between the engine and whatever holds the tokens.
//!
//! The engine computes amounts and decides which movements a call needs;
//! a [`TokenCustody`] executes them. Custody is trusted to apply a
//! [`Settlement`] all-or-nothing and to check that every debit is
//! authorized by its signer.

use crate::custody::Settlement;
use crate::domain::{Address, Amount, Decimals, TokenId};
use crate::error::AmmError;
use crate::pools::PoolAccounts;

/// A token ledger that can execute pool settlements.
pub trait TokenCustody {
    /// Prepares the accounts a new pool needs: one vault per token owned by
    /// the pool authority, and the share-token mint with the pool as its
    /// mint authority.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if the accounts are already
    /// open.
    fn open_pool_accounts(
        &mut self,
        accounts: &PoolAccounts,
        share_decimals: Decimals,
    ) -> Result<(), AmmError>;

    /// Returns the balance of `token` held by `holder`; zero if unknown.
    #[must_use]
    fn balance(&self, token: TokenId, holder: Address) -> Amount;

    /// Applies every movement of `settlement`, or none of them.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if a debit is not signed by its owner.
    /// - [`AmmError::InsufficientBalance`] if a debit exceeds a balance.
    /// - [`AmmError::ArithmeticOverflow`] if a credit overflows.
    fn settle(&mut self, settlement: &Settlement) -> Result<(), AmmError>;
}
