//! In-memory link provider for host tests

use ewelink_hal::{LinkProvider, RxBuffer, TxPower, DATA_LENGTH};
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct MockLink {
    pub rx: RxBuffer,
    pub starts: u32,
    pub fail_start: bool,
    pub power: Option<TxPower>,
    pub connected: bool,
    pub sent: Vec<u8, DATA_LENGTH>,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the RX buffer, as a controller write would
    pub fn load(&mut self, data: &[u8]) {
        self.rx.clear();
        self.rx.extend_from_slice(data).unwrap();
    }
}

impl LinkProvider for MockLink {
    type Error = MockError;

    fn start_service(&mut self) -> Result<(), Self::Error> {
        self.starts += 1;
        if self.fail_start {
            Err(MockError)
        } else {
            Ok(())
        }
    }

    fn read_buffer(&mut self) -> RxBuffer {
        self.rx.clone()
    }

    fn set_transmit_power(&mut self, level: TxPower) {
        self.power = Some(level);
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if !self.connected {
            return Ok(0);
        }
        let len = data.len().min(DATA_LENGTH);
        self.sent.clear();
        self.sent.extend_from_slice(&data[..len]).unwrap();
        Ok(len)
    }
}
