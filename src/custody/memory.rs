//! In-memory reference custody.

use std::collections::HashMap;

use super::{Movement, Settlement};
use crate::domain::{Address, Amount, Decimals, TokenId};
use crate::error::AmmError;
use crate::pools::PoolAccounts;
use crate::traits::TokenCustody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vault {
    token: TokenId,
    owner: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShareMint {
    authority: Address,
    decimals: Decimals,
    supply: u64,
}

/// A token ledger held entirely in memory.
///
/// Tracks balances per `(token, holder)`, which addresses are pool vaults
/// and who owns them, and the share-token mints with their supply. Any
/// holder can be funded with [`InMemoryCustody::credit`]; everything else
/// moves only through [`TokenCustody::settle`].
///
/// # Authorization
///
/// - A debit from a vault requires the settlement to carry the vault
///   owner's [`PoolAuthority`](crate::pools::PoolAuthority).
/// - A debit from any other account requires that account to be the
///   signer.
/// - A mint requires the mint's authority; a burn requires the holder to
///   be the signer.
///
/// # Examples
///
/// ```
/// use pairswap::custody::{InMemoryCustody, Settlement};
/// use pairswap::domain::{Address, Amount, TokenId};
/// use pairswap::traits::TokenCustody;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let bob = Address::from_bytes([2u8; 32]);
/// let usdc = TokenId::from_bytes([9u8; 32]);
///
/// let mut custody = InMemoryCustody::new();
/// custody.credit(usdc, alice, Amount::new(100)).expect("funded");
///
/// let s = Settlement::new(alice).transfer(usdc, alice, bob, Amount::new(40));
/// custody.settle(&s).expect("settled");
/// assert_eq!(custody.balance(usdc, bob), Amount::new(40));
///
/// // Bob cannot move Alice's funds.
/// let theft = Settlement::new(bob).transfer(usdc, alice, bob, Amount::new(1));
/// assert!(custody.settle(&theft).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustody {
    balances: HashMap<(TokenId, Address), u64>,
    vaults: HashMap<Address, Vault>,
    mints: HashMap<TokenId, ShareMint>,
}

impl InMemoryCustody {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` of `token` to `holder` out of thin air.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token` is a pool share token.
    /// - [`AmmError::ArithmeticOverflow`] if the balance would overflow.
    pub fn credit(
        &mut self,
        token: TokenId,
        holder: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if self.mints.contains_key(&token) {
            return Err(AmmError::InvalidToken(
                "share tokens are only minted by their pool",
            ));
        }
        let balance = self.balances.entry((token, holder)).or_insert(0);
        *balance = balance
            .checked_add(amount.get())
            .ok_or(AmmError::ArithmeticOverflow("credit balance"))?;
        Ok(())
    }

    /// Returns the outstanding supply of a share token.
    #[must_use]
    pub fn share_supply(&self, mint: TokenId) -> Option<Amount> {
        self.mints.get(&mint).map(|m| Amount::new(m.supply))
    }

    /// Returns the decimals of a share token.
    #[must_use]
    pub fn share_decimals(&self, mint: TokenId) -> Option<Decimals> {
        self.mints.get(&mint).map(|m| m.decimals)
    }

    /// Returns the owner of a vault, or `None` if `address` is not a vault.
    #[must_use]
    pub fn vault_owner(&self, address: Address) -> Option<Address> {
        self.vaults.get(&address).map(|v| v.owner)
    }
}

impl TokenCustody for InMemoryCustody {
    fn open_pool_accounts(
        &mut self,
        accounts: &PoolAccounts,
        share_decimals: Decimals,
    ) -> Result<(), AmmError> {
        let owner = accounts.authority_address();
        if self.mints.contains_key(&accounts.share_mint()) {
            return Err(AmmError::PoolAlreadyExists);
        }
        if accounts
            .vaults()
            .iter()
            .any(|(_, vault)| self.vaults.contains_key(vault))
        {
            return Err(AmmError::PoolAlreadyExists);
        }
        for (token, vault) in accounts.vaults() {
            self.vaults.insert(vault, Vault { token, owner });
        }
        self.mints.insert(
            accounts.share_mint(),
            ShareMint {
                authority: owner,
                decimals: share_decimals,
                supply: 0,
            },
        );
        Ok(())
    }

    fn balance(&self, token: TokenId, holder: Address) -> Amount {
        Amount::new(self.balances.get(&(token, holder)).copied().unwrap_or(0))
    }

    fn settle(&mut self, settlement: &Settlement) -> Result<(), AmmError> {
        let mut overlay = Overlay::new(self, settlement);
        for movement in settlement.movements() {
            overlay.apply(movement)?;
        }
        let (balances, supplies) = overlay.into_parts();
        self.balances.extend(balances);
        for (token, supply) in supplies {
            if let Some(mint) = self.mints.get_mut(&token) {
                mint.supply = supply;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Pending writes of one settlement, validated against the committed ledger.
struct Overlay<'a> {
    base: &'a InMemoryCustody,
    settlement: &'a Settlement,
    balances: HashMap<(TokenId, Address), u64>,
    supplies: HashMap<TokenId, u64>,
}

impl<'a> Overlay<'a> {
    fn new(base: &'a InMemoryCustody, settlement: &'a Settlement) -> Self {
        Self {
            base,
            settlement,
            balances: HashMap::new(),
            supplies: HashMap::new(),
        }
    }

    fn into_parts(self) -> (HashMap<(TokenId, Address), u64>, HashMap<TokenId, u64>) {
        (self.balances, self.supplies)
    }

    fn balance(&self, token: TokenId, holder: Address) -> u64 {
        self.balances
            .get(&(token, holder))
            .or_else(|| self.base.balances.get(&(token, holder)))
            .copied()
            .unwrap_or(0)
    }

    fn authority_address(&self) -> Option<Address> {
        self.settlement.authority().map(|a| a.address())
    }

    fn apply(&mut self, movement: &Movement) -> Result<(), AmmError> {
        match *movement {
            Movement::Transfer {
                token,
                from,
                to,
                amount,
            } => {
                self.authorize_debit(from)?;
                self.debit(token, from, amount)?;
                self.credit(token, to, amount)
            }
            Movement::Mint { token, to, amount } => {
                let mint = self.mint(token)?;
                if self.authority_address() != Some(mint.authority) {
                    return Err(AmmError::Unauthorized("mint requires the pool authority"));
                }
                let supply = self
                    .supply(token, &mint)
                    .checked_add(amount.get())
                    .ok_or(AmmError::ArithmeticOverflow("share supply"))?;
                self.supplies.insert(token, supply);
                self.credit(token, to, amount)
            }
            Movement::Burn {
                token,
                from,
                amount,
            } => {
                let mint = self.mint(token)?;
                if from != self.settlement.signer() {
                    return Err(AmmError::Unauthorized("burn not signed by holder"));
                }
                self.debit(token, from, amount)?;
                let supply = self
                    .supply(token, &mint)
                    .checked_sub(amount.get())
                    .ok_or(AmmError::InvariantViolation("burn exceeds share supply"))?;
                self.supplies.insert(token, supply);
                Ok(())
            }
        }
    }

    fn mint(&self, token: TokenId) -> Result<ShareMint, AmmError> {
        self.base
            .mints
            .get(&token)
            .copied()
            .ok_or(AmmError::InvalidToken("unknown share mint"))
    }

    fn supply(&self, token: TokenId, mint: &ShareMint) -> u64 {
        self.supplies.get(&token).copied().unwrap_or(mint.supply)
    }

    fn authorize_debit(&self, holder: Address) -> Result<(), AmmError> {
        match self.base.vaults.get(&holder) {
            Some(vault) if self.authority_address() == Some(vault.owner) => Ok(()),
            Some(_) => Err(AmmError::Unauthorized(
                "vault debit requires the pool authority",
            )),
            None if holder == self.settlement.signer() => Ok(()),
            None => Err(AmmError::Unauthorized("debit not signed by holder")),
        }
    }

    fn debit(&mut self, token: TokenId, holder: Address, amount: Amount) -> Result<(), AmmError> {
        let next = self
            .balance(token, holder)
            .checked_sub(amount.get())
            .ok_or(AmmError::InsufficientBalance("debit exceeds balance"))?;
        self.balances.insert((token, holder), next);
        Ok(())
    }

    fn credit(&mut self, token: TokenId, holder: Address, amount: Amount) -> Result<(), AmmError> {
        if let Some(vault) = self.base.vaults.get(&holder) {
            if vault.token != token {
                return Err(AmmError::InvalidToken("vault holds a different token"));
            }
        }
        let next = self
            .balance(token, holder)
            .checked_add(amount.get())
            .ok_or(AmmError::ArithmeticOverflow("credit balance"))?;
        self.balances.insert((token, holder), next);
        Ok(())
    }
}
