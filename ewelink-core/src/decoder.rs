//! Inbound buffer classification
//!
//! One decode cycle reads one buffer. An empty buffer means nothing new
//! arrived; anything else is either a valid packet or noise to drop.

use ewelink_protocol::{Packet, PacketError};

/// Classification of a raw inbound buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// Buffer was empty
    Idle,
    /// Buffer failed validation
    Discarded(PacketError),
    /// Buffer is a valid packet
    Accepted(Packet),
}

/// Result of one decode cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// No data this cycle
    Idle,
    /// Packet dropped; state untouched
    Discarded(PacketError),
    /// Packet accepted and its code recorded
    Pressed {
        /// Raw command code
        code: u8,
        /// Whether a handler was bound to the code
        handled: bool,
    },
}

/// Classify a raw buffer without touching any state
pub fn decode(data: &[u8]) -> Decoded {
    if data.is_empty() {
        return Decoded::Idle;
    }

    match Packet::parse(data) {
        Ok(packet) => Decoded::Accepted(packet),
        Err(e) => Decoded::Discarded(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewelink_protocol::Direction;

    #[test]
    fn test_empty_is_idle() {
        assert_eq!(decode(&[]), Decoded::Idle);
    }

    #[test]
    fn test_valid_packet_accepted() {
        match decode(&[1, 0, 0, 0, 3, 4]) {
            Decoded::Accepted(packet) => assert_eq!(packet.direction(), Some(Direction::Up)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_short_packet_discarded() {
        assert_eq!(
            decode(&[0, 0, 0, 0]),
            Decoded::Discarded(PacketError::TooShort { len: 4 })
        );
    }
}
