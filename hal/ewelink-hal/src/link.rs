//! Radio link provider abstraction
//!
//! The provider owns the BLE GATT service. It stores the last buffer the
//! controller wrote to the RX characteristic and raises
//! [`LinkEvent::DataWritten`] on the host's event queue each time a new
//! one arrives.

use heapless::Vec;

use crate::gatt::DATA_LENGTH;
use crate::power::TxPower;

/// Inbound buffer as copied out of the RX characteristic
pub type RxBuffer = Vec<u8, DATA_LENGTH>;

/// Notifications delivered by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// A central connected
    Connected,
    /// The central disconnected
    Disconnected,
    /// A new buffer was written to the RX characteristic
    DataWritten,
}

/// Radio link provider
///
/// Implementations do not need to be `Send` or `Sync`; the service runs on
/// a single executor.
pub trait LinkProvider {
    /// Platform-specific error type
    type Error: core::fmt::Debug;

    /// Register the GATT service and start the radio
    fn start_service(&mut self) -> Result<(), Self::Error>;

    /// Copy out the most recent inbound buffer
    ///
    /// Returns an empty buffer when nothing has been received.
    fn read_buffer(&mut self) -> RxBuffer;

    /// Set the radio transmit power
    fn set_transmit_power(&mut self, level: TxPower);

    /// Check if a central is currently connected
    fn is_connected(&self) -> bool;

    /// Write data to the TX characteristic and notify the central
    ///
    /// Data longer than [`DATA_LENGTH`] is truncated. Returns the number of
    /// bytes sent, which is 0 while disconnected. The default implementation
    /// is for providers without a TX characteristic and sends nothing.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        let _ = data;
        Ok(0)
    }
}
