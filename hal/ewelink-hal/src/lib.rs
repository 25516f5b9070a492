//! eWeLink Link Abstraction Layer
//!
//! This crate defines the interface between the remote-control logic and
//! the radio stack that actually carries the packets. A board crate wraps
//! its BLE stack in [`link::LinkProvider`]; everything above this crate is
//! written against the trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ewelink-core (decoder, handlers)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ewelink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board BLE stack (GATT service)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`link`] - Provider trait, inbound buffer type, link events
//! - [`gatt`] - Service and characteristic identifiers
//! - [`power`] - Transmit power levels

#![no_std]
#![deny(unsafe_code)]

pub mod gatt;
pub mod link;
pub mod power;

pub use gatt::DATA_LENGTH;
pub use link::{LinkEvent, LinkProvider, RxBuffer};
pub use power::TxPower;
