//! Token decimal places.

use crate::error::AmmError;

/// Maximum allowed decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token, used for the share token a pool
/// mints.
///
/// Valid range is `0..=18`. The engine itself never rescales amounts; the
/// value is recorded so that custody can create the share token with the
/// right precision.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Decimals;
///
/// let d = Decimals::new(9).expect("9 is valid");
/// assert_eq!(d.get(), 9);
/// assert_eq!(Decimals::SHARE_DEFAULT, d);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Decimal places of a freshly created share token (9).
    pub const SHARE_DEFAULT: Self = Self(9);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Decimals {
    fn default() -> Self {
        Self::SHARE_DEFAULT
    }
}
