//! eWeLink service context
//!
//! [`EWeLink`] owns the link provider together with the handler registry
//! and the press state. The host wires the provider's notifications to
//! [`EWeLink::handle_event`]; tests can skip the provider entirely and feed
//! buffers to [`EWeLink::process`].
//!
//! Everything runs on one executor. A decode cycle, including the handler
//! it triggers, finishes before the next notification is looked at.

use ewelink_hal::{LinkEvent, LinkProvider, TxPower};
use ewelink_protocol::Direction;

use crate::config::ServiceConfig;
use crate::decoder::{decode, Decoded, Outcome};
use crate::registry::HandlerRegistry;
use crate::state::PressState;

/// Remote-control service bound to a link provider
pub struct EWeLink<'a, L: LinkProvider> {
    link: L,
    config: ServiceConfig,
    handlers: HandlerRegistry<'a>,
    state: PressState,
    listeners: u8,
}

impl<'a, L: LinkProvider> EWeLink<'a, L> {
    /// Create a service with the default configuration
    pub fn new(link: L) -> Self {
        Self::with_config(link, ServiceConfig::default())
    }

    /// Create a service with the given configuration
    pub fn with_config(link: L, config: ServiceConfig) -> Self {
        Self {
            link,
            config,
            handlers: HandlerRegistry::new(),
            state: PressState::new(),
            listeners: 0,
        }
    }

    /// Start the link and listen for written data
    ///
    /// Call once. Each call registers another listener, so after a second
    /// call every notification is decoded twice.
    pub fn start(&mut self) {
        if let Err(_e) = self.link.start_service() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Link service failed to start: {:?}", defmt::Debug2Format(&_e));
        }

        if let Some(level) = self.config.transmit_power {
            self.link.set_transmit_power(level);
        }

        if self.listeners > 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("Service started again, {} listeners", self.listeners + 1);
        }
        self.listeners = self.listeners.saturating_add(1);
    }

    /// Handle a notification from the link provider
    ///
    /// Returns the outcome of the last decode cycle for
    /// [`LinkEvent::DataWritten`], `None` for anything else or while no
    /// listener is registered.
    pub fn handle_event(&mut self, event: LinkEvent) -> Option<Outcome> {
        match event {
            LinkEvent::DataWritten => {
                let mut outcome = None;
                for _ in 0..self.listeners {
                    outcome = Some(self.on_data_written());
                }
                outcome
            }
            LinkEvent::Connected | LinkEvent::Disconnected => {
                #[cfg(feature = "defmt")]
                defmt::info!("Link event: {:?}", event);
                None
            }
        }
    }

    /// Run one decode cycle on the provider's current buffer
    pub fn on_data_written(&mut self) -> Outcome {
        let buffer = self.link.read_buffer();
        self.process(&buffer)
    }

    /// Run one decode cycle on `data`
    ///
    /// Invalid packets leave all state untouched. A valid packet always
    /// updates the press state, even for codes with no handler.
    pub fn process(&mut self, data: &[u8]) -> Outcome {
        match decode(data) {
            Decoded::Idle => Outcome::Idle,
            Decoded::Discarded(e) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Packet discarded: {:?}", e);
                Outcome::Discarded(e)
            }
            Decoded::Accepted(packet) => {
                self.state.record(packet.command);
                let handled = self.handlers.dispatch(packet.command);

                #[cfg(feature = "defmt")]
                defmt::debug!("Pressed: code {} (handled: {})", packet.command, handled);

                Outcome::Pressed {
                    code: packet.command,
                    handled,
                }
            }
        }
    }

    /// Register the handler for `direction`, replacing any previous one
    pub fn on_pressed<F>(&mut self, direction: Direction, handler: F)
    where
        F: FnMut() + 'a,
    {
        self.on_pressed_code(direction.code(), handler);
    }

    /// Register a handler for a raw command code
    ///
    /// Codes outside the known directions are accepted; they only fire if
    /// a controller ever sends them.
    pub fn on_pressed_code<F>(&mut self, code: u8, handler: F)
    where
        F: FnMut() + 'a,
    {
        if self.handlers.register(code, handler) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Replaced handler for code {}", code);
        }
    }

    /// Check if `direction` was the last direction received
    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.state.is_pressed(direction)
    }

    /// Raw code of the last accepted packet
    pub fn pressed_code(&self) -> u8 {
        self.state.code()
    }

    /// Last direction received, if its code is known
    pub fn pressed_direction(&self) -> Option<Direction> {
        self.state.direction()
    }

    /// Check if a controller is connected
    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    /// Set the transmit power, clamped to `0..=7`
    pub fn set_transmit_power(&mut self, level: i32) {
        self.link.set_transmit_power(TxPower::clamped(level));
    }

    /// Send data on the TX characteristic
    pub fn send(&mut self, data: &[u8]) -> Result<usize, L::Error> {
        self.link.write(data)
    }

    /// Number of registered notification listeners
    pub fn listeners(&self) -> u8 {
        self.listeners
    }

    /// Active configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get access to the underlying link provider
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get mutable access to the underlying link provider
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }
}
