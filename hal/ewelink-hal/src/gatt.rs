//! GATT identifiers for the eWeLink service
//!
//! The service lives under the Bluetooth base UUID
//! `0000xxxx-0000-1000-8000-00805f9b34fb` with 16-bit short ids.

/// Bluetooth base UUID (short id bytes zeroed)
pub const BASE_UUID: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0x80, 0x5f, 0x9b, 0x34, 0xfb,
];

/// Service short UUID
pub const SERVICE_UUID: u16 = 0x4b5a;

/// RX characteristic (controller writes packets here)
pub const RX_CHAR_UUID: u16 = 0x4b5c;

/// TX characteristic (readable/notified by the device)
pub const TX_CHAR_UUID: u16 = 0x4b5b;

/// Capacity of the RX and TX characteristic buffers
pub const DATA_LENGTH: usize = 20;

/// Message bus source id for service events
pub const EVENT_SOURCE_ID: u16 = 2301;

/// Message bus value raised when the RX characteristic is written
pub const EVT_ON_WRITTEN: u16 = 60;

/// Expand a 16-bit short UUID into a full 128-bit UUID
pub const fn full_uuid(short: u16) -> [u8; 16] {
    let mut uuid = BASE_UUID;
    let bytes = short.to_be_bytes();
    uuid[2] = bytes[0];
    uuid[3] = bytes[1];
    uuid
}
