//! Packet validation and encoding
//!
//! Packet rules:
//! - At least [`MIN_PACKET_LEN`] bytes, so the command byte exists
//! - COMMAND at [`COMMAND_INDEX`]
//! - CHECKSUM as the last byte, `2 × CHECKSUM == sum(all bytes)`
//!
//! - At most [`DATA_LENGTH`] bytes, the characteristic buffer size
//!
//! The sum is taken without wrapping. Length is bounded before summing, so
//! a `u32` accumulator never overflows.

use ewelink_hal::DATA_LENGTH;
use heapless::Vec;

use crate::direction::Direction;

/// Minimum packet length (header + command + checksum)
pub const MIN_PACKET_LEN: usize = 5;

/// Index of the command byte
pub const COMMAND_INDEX: usize = 4;

/// Encoded packet
pub type PacketBuf = Vec<u8, DATA_LENGTH>;

/// Errors that can occur during packet parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// No bytes available
    Empty,
    /// Packet too short to carry a command byte
    TooShort { len: usize },
    /// Packet longer than the characteristic buffer
    TooLong { len: usize },
    /// Header shorter than the bytes preceding the command
    HeaderTooShort { len: usize },
    /// `2 × last byte` does not equal the byte sum
    ChecksumMismatch { last: u8, sum: u32 },
    /// Encoded packet would not fit the characteristic buffer
    PayloadTooLarge,
    /// Checksum byte cannot hold the sum of the preceding bytes
    ChecksumOverflow,
}

/// Plain sum of all bytes
///
/// Saturates at `u32::MAX`, which needs far more bytes than a packet holds.
pub fn checksum_sum(data: &[u8]) -> u32 {
    data.iter().fold(0u32, |acc, &b| acc.saturating_add(b as u32))
}

/// Check the `2 × last == sum` rule
///
/// An empty buffer never holds.
pub fn checksum_holds(data: &[u8]) -> bool {
    match data.last() {
        Some(&last) => {
            let sum: u64 = data.iter().map(|&b| u64::from(b)).sum();
            2 * u64::from(last) == sum
        }
        None => false,
    }
}

/// A validated controller packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Raw command byte (a [`Direction`] code in normal operation)
    pub command: u8,
    /// Checksum byte
    pub checksum: u8,
    /// Total packet length in bytes
    pub len: usize,
}

impl Packet {
    /// Validate a raw buffer
    ///
    /// Length is checked before any indexing or summing; the checksum is
    /// checked last.
    pub fn parse(data: &[u8]) -> Result<Self, PacketError> {
        let Some(&last) = data.last() else {
            return Err(PacketError::Empty);
        };

        if data.len() < MIN_PACKET_LEN {
            return Err(PacketError::TooShort { len: data.len() });
        }
        if data.len() > DATA_LENGTH {
            return Err(PacketError::TooLong { len: data.len() });
        }

        let sum = checksum_sum(data);
        if 2 * last as u32 != sum {
            return Err(PacketError::ChecksumMismatch { last, sum });
        }

        Ok(Self {
            command: data[COMMAND_INDEX],
            checksum: last,
            len: data.len(),
        })
    }

    /// Direction carried by the command byte, if it is a known code
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_code(self.command)
    }

    /// Build a packet from a header and a command byte
    ///
    /// The header supplies every byte before [`COMMAND_INDEX`] and must be
    /// at least four bytes long. The checksum appended is the sum of all
    /// preceding bytes, which is the only value satisfying the rule.
    pub fn encode(header: &[u8], command: u8) -> Result<PacketBuf, PacketError> {
        if header.len() < COMMAND_INDEX {
            return Err(PacketError::HeaderTooShort { len: header.len() });
        }
        if header.len() + 2 > DATA_LENGTH {
            return Err(PacketError::PayloadTooLarge);
        }

        let sum = checksum_sum(header) + command as u32;
        let checksum = u8::try_from(sum).map_err(|_| PacketError::ChecksumOverflow)?;

        let mut buf = PacketBuf::new();
        buf.extend_from_slice(header)
            .map_err(|_| PacketError::PayloadTooLarge)?;
        buf.push(command).map_err(|_| PacketError::PayloadTooLarge)?;
        buf.push(checksum).map_err(|_| PacketError::PayloadTooLarge)?;
        Ok(buf)
    }

    /// Build a packet for a direction with a zeroed header
    ///
    /// The checksum equals the direction code.
    pub const fn for_direction(direction: Direction) -> [u8; 6] {
        let code = direction.code();
        [0, 0, 0, 0, code, code]
    }
}
