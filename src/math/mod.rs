//! Integer arithmetic for pool calculations.
//!
//! Every quantity is an unsigned integer. Products are formed in `u128`
//! with checked operations and narrowed back to `u64` through
//! [`narrow`]; any overflow surfaces as
//! [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow).
//! Division always names its [`Rounding`](crate::domain::Rounding).

mod checked;
pub mod constant_product;
mod fixed_point;

pub use checked::CheckedArithmetic;
pub use fixed_point::{div_rounded, mul_div, narrow};
