//! Explicit rounding direction for arithmetic operations.

/// Specifies the rounding direction for division.
///
/// All division in the engine takes an explicit `Rounding` so that every
/// call site states which side of the trade absorbs the remainder.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling). Used for required inputs.
    Up,
    /// Round towards zero (floor). Used for outputs and minted shares.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
    }

    #[test]
    fn down_is_down() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }
}
