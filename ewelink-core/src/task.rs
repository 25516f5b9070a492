//! Async event pump
//!
//! Board crates forward link notifications into an Embassy channel from
//! their BLE callbacks; a task drains the channel into the service.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use ewelink_hal::{LinkEvent, LinkProvider};

use crate::decoder::Outcome;
use crate::service::EWeLink;

/// Wait for one link event and handle it
pub async fn pump<L, M, const N: usize>(
    service: &mut EWeLink<'_, L>,
    events: &Receiver<'_, M, LinkEvent, N>,
) -> Option<Outcome>
where
    L: LinkProvider,
    M: RawMutex,
{
    let event = events.receive().await;
    service.handle_event(event)
}

/// Handle link events forever
pub async fn run<L, M, const N: usize>(
    service: &mut EWeLink<'_, L>,
    events: Receiver<'_, M, LinkEvent, N>,
) -> !
where
    L: LinkProvider,
    M: RawMutex,
{
    #[cfg(feature = "defmt")]
    defmt::info!("eWeLink event task started");

    loop {
        pump(service, &events).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLink;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use ewelink_protocol::{Direction, Packet};

    #[test]
    fn test_pump_handles_queued_events_in_order() {
        let hits = Cell::new(0);
        let mut link = MockLink::new();
        link.load(&Packet::for_direction(Direction::Up));
        let mut service = EWeLink::new(link);
        service.on_pressed(Direction::Up, || hits.set(hits.get() + 1));
        service.start();

        let channel = Channel::<NoopRawMutex, LinkEvent, 4>::new();
        channel.try_send(LinkEvent::Connected).unwrap();
        channel.try_send(LinkEvent::DataWritten).unwrap();
        let receiver = channel.receiver();

        assert_eq!(block_on(pump(&mut service, &receiver)), None);
        assert_eq!(hits.get(), 0);

        assert_eq!(
            block_on(pump(&mut service, &receiver)),
            Some(Outcome::Pressed {
                code: Direction::Up.code(),
                handled: true
            })
        );
        assert_eq!(hits.get(), 1);
        assert!(service.is_pressed(Direction::Up));
    }
}
