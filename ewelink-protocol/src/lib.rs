//! eWeLink Remote Controller Protocol
//!
//! The paired controller writes status packets to the RX characteristic of
//! the eWeLink GATT service. A packet is a short run of unsigned bytes:
//!
//! ```text
//! ┌──────────────┬─────────┬──────────┐
//! │ HEADER       │ COMMAND │ CHECKSUM │
//! │ 4B (or more) │ 1B      │ 1B       │
//! └──────────────┴─────────┴──────────┘
//! ```
//!
//! The command byte sits at index 4 and carries a [`Direction`] code.
//! The checksum is the last byte and must satisfy
//! `2 × checksum == sum(all bytes)`, i.e. it equals the plain (unwrapped)
//! sum of every byte before it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod direction;
pub mod packet;

pub use direction::Direction;
pub use packet::{
    checksum_holds, checksum_sum, Packet, PacketBuf, PacketError, COMMAND_INDEX, MIN_PACKET_LEN,
};
