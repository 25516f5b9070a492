//! Last pressed direction
//!
//! Starts at [`Direction::Stop`] and follows every accepted packet. The raw
//! command byte is kept, so an unknown code is remembered too and simply
//! matches no [`Direction`].

use ewelink_protocol::Direction;

/// Cached command code of the last accepted packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressState {
    code: u8,
}

impl Default for PressState {
    fn default() -> Self {
        Self::new()
    }
}

impl PressState {
    /// Create a state at `Stop`
    pub const fn new() -> Self {
        Self {
            code: Direction::Stop.code(),
        }
    }

    /// Record the command code of an accepted packet
    pub fn record(&mut self, code: u8) {
        self.code = code;
    }

    /// Raw code of the last accepted packet
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Last direction, if the code is a known one
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_code(self.code)
    }

    /// Check if `direction` was the last one received
    ///
    /// This reflects the last packet, not whether the button is still held.
    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.code == direction.code()
    }
}
