//! Board-agnostic core logic for the eWeLink remote-control service
//!
//! This crate turns RX characteristic writes into button events:
//!
//! - Packet decoding on each "data written" notification
//! - Handler registry, one handler per direction
//! - Cache of the last pressed direction
//! - Service context tying the link provider to the above
//! - Async event pump for Embassy executors
//!
//! All state lives in an [`EWeLink`] value owned by the caller, so several
//! independent services can coexist.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod decoder;
pub mod registry;
pub mod service;
pub mod state;
pub mod task;

#[cfg(test)]
mod mock;

pub use config::{parse_config, ConfigError, ServiceConfig};
pub use decoder::{decode, Decoded, Outcome};
pub use registry::HandlerRegistry;
pub use service::EWeLink;
pub use state::PressState;

pub use ewelink_hal::{LinkEvent, LinkProvider, TxPower};
pub use ewelink_protocol::{Direction, Packet, PacketError};
