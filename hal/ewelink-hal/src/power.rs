//! Transmit power levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of transmit power levels supported by the radio
pub const POWER_LEVELS: u8 = 8;

/// Radio transmit power, from 0 (minimal) to 7 (maximum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TxPower(u8);

impl TxPower {
    /// Lowest power level
    pub const MIN: Self = Self(0);
    /// Highest power level
    pub const MAX: Self = Self(POWER_LEVELS - 1);

    /// Create a power level, rejecting values outside `0..=7`
    pub const fn new(level: u8) -> Option<Self> {
        if level < POWER_LEVELS {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Create a power level, clamping into `0..=7`
    pub fn clamped(level: i32) -> Self {
        Self(level.clamp(0, (POWER_LEVELS - 1) as i32) as u8)
    }

    /// Raw level value
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for TxPower {
    fn default() -> Self {
        Self::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(TxPower::new(0), Some(TxPower::MIN));
        assert_eq!(TxPower::new(7), Some(TxPower::MAX));
        assert_eq!(TxPower::new(8), None);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(TxPower::clamped(-3).level(), 0);
        assert_eq!(TxPower::clamped(4).level(), 4);
        assert_eq!(TxPower::clamped(100).level(), 7);
    }

    #[test]
    fn test_default_is_max() {
        assert_eq!(TxPower::default(), TxPower::MAX);
    }
}
