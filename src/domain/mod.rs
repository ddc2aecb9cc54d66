//! Value types of the pairswap domain.
//!
//! Identifiers, integer amounts, fee rates, and the request and outcome
//! records exchanged with pools. Newtypes with validated constructors keep
//! raw integers from being mixed up.

mod address;
mod amount;
mod call_context;
mod decimals;
mod fee_rate;
mod liquidity_change;
mod rounding;
mod shares;
mod swap_outcome;
mod token_id;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use call_context::CallContext;
pub use decimals::Decimals;
pub use fee_rate::FeeRate;
pub use liquidity_change::{DepositOutcome, DepositRequest, WithdrawOutcome};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_outcome::SwapOutcome;
pub use token_id::TokenId;
pub use token_pair::TokenPair;
