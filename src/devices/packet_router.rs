//! Inbound packet routing.
//!
//! Every packet the radio hands over goes to exactly one consumer. While
//! the diagnostic monitor is active it takes everything, whatever screen
//! is showing. Otherwise the active application gets it; applications
//! without a packet handler cause a one line report on the diagnostic
//! serial, and the packet is dropped.
use super::{app_manager::AppManager, application::Reception};
use crate::{
    error::Error,
    hal::{radio::Packets, serial, time::RealTimeClock},
};
use ufmt::uwriteln;

/// Diagnostic monitor. The monitor alone decides when it is active;
/// the router only looks.
pub trait Monitor {
    fn is_active(&self) -> bool;
    fn forward(&mut self, packet: &[u8]);
}

pub struct PacketRouter<M: Monitor, S: serial::Write> {
    monitor: M,
    serial: S,
}

impl<M: Monitor, S: serial::Write> PacketRouter<M, S> {
    pub fn new(monitor: M, serial: S) -> Self { Self { monitor, serial } }

    pub fn route_packet<C: RealTimeClock, const N: usize>(
        &mut self,
        manager: &mut AppManager<'_, C, N>,
        packet: &[u8],
    ) {
        if self.monitor.is_active() {
            self.monitor.forward(packet);
            return;
        }

        if manager.active_application().packet_rx(packet) == Reception::Unsupported {
            let name = manager.active_name();
            log_warn!("Dropped a packet, {:?} has no handler.", name);
            uwriteln!(self.serial, "No packet RX handler for {}.", name).ok();
        }
    }

    /// Routes the next packet waiting in `radio`, if there is one.
    /// Returns whether a packet was routed.
    pub fn poll<R: Packets, C: RealTimeClock, const N: usize>(
        &mut self,
        radio: &mut R,
        manager: &mut AppManager<'_, C, N>,
        buffer: &mut [u8],
    ) -> bool
    where
        Error: From<R::Error>,
    {
        match radio.receive(buffer) {
            Ok(length) => match buffer.get(..length) {
                Some(packet) => {
                    self.route_packet(manager, packet);
                    true
                }
                None => {
                    log_warn!("Radio reported a {:?} byte packet, dropped.", length);
                    false
                }
            },
            Err(nb::Error::WouldBlock) => false,
            Err(nb::Error::Other(e)) => {
                log_warn!("Failed to receive a packet: {:?}", Error::from(e));
                false
            }
        }
    }

    pub fn monitor(&self) -> &M { &self.monitor }

    pub fn monitor_mut(&mut self) -> &mut M { &mut self.monitor }

    pub fn serial(&self) -> &S { &self.serial }
}

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles {
    use super::Monitor;
    use std::vec::Vec;

    /// Monitor that keeps every packet forwarded to it.
    #[derive(Debug, Default)]
    pub struct RecordingMonitor {
        pub active: bool,
        pub packets: Vec<Vec<u8>>,
    }

    impl Monitor for RecordingMonitor {
        fn is_active(&self) -> bool { self.active }
        fn forward(&mut self, packet: &[u8]) { self.packets.push(packet.to_vec()) }
    }
}

#[cfg(test)]
mod test {
    use super::{doubles::RecordingMonitor, *};
    use crate::{
        devices::{
            application::Application,
            doubles::{Hook, Journal, RecordingApp},
            registry::{Registry, HOME},
        },
        hal::doubles::{radio::FakeRadio, serial::RecordingSerial, time::FakeClock},
    };

    const PACKET: &[u8] = &[0xB0, 0xB0, 0x01, 0x02];

    #[test]
    fn diagnostic_mode_takes_every_packet() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal).receiving();
        let mut other = RecordingApp::new("other", &journal);
        let registry = Registry::new([&mut home, &mut other]).unwrap();
        let mut manager = AppManager::new(registry, &clock, HOME);
        manager.init();
        journal.clear();
        let monitor = RecordingMonitor { active: true, ..Default::default() };
        let mut router = PacketRouter::new(monitor, RecordingSerial::default());

        // When
        router.route_packet(&mut manager, PACKET);
        manager.request_next();
        router.route_packet(&mut manager, PACKET);

        // Then
        assert_eq!(2, router.monitor().packets.len());
        assert_eq!(0, journal.count("home", &Hook::Packet(PACKET.to_vec())));
        assert!(router.serial().text.is_empty());
    }

    #[test]
    fn active_application_receives_packets_outside_diagnostic_mode() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal);
        let mut radio = RecordingApp::new("radio", &journal).receiving();
        let registry = Registry::new([&mut home, &mut radio]).unwrap();
        let mut manager = AppManager::new(registry, &clock, 1);
        manager.init();
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());

        // When
        router.route_packet(&mut manager, PACKET);

        // Then
        assert_eq!(1, journal.count("radio", &Hook::Packet(PACKET.to_vec())));
        assert!(router.monitor().packets.is_empty());
        assert!(router.serial().text.is_empty());
    }

    #[test]
    fn packets_without_a_handler_are_reported_once_and_dropped() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal);
        let mut deaf = RecordingApp::new("deaf", &journal);
        let registry = Registry::new([&mut home, &mut deaf]).unwrap();
        let mut manager = AppManager::new(registry, &clock, 1);
        manager.init();
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());

        // When
        router.route_packet(&mut manager, PACKET);

        // Then
        assert_eq!(1, manager.active_index());
        assert_eq!(vec!["No packet RX handler for deaf."], router.serial().lines().collect::<Vec<_>>());
        assert!(router.monitor().packets.is_empty());
    }

    #[test]
    fn monitor_can_be_toggled_between_packets() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal).receiving();
        let registry = Registry::new([&mut home as &mut dyn Application]).unwrap();
        let mut manager = AppManager::new(registry, &clock, HOME);
        manager.init();
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());

        // When
        router.monitor_mut().active = true;
        router.route_packet(&mut manager, &[1]);
        router.monitor_mut().active = false;
        router.route_packet(&mut manager, &[2]);

        // Then
        assert_eq!(vec![vec![1u8]], router.monitor().packets);
        assert_eq!(1, journal.count("home", &Hook::Packet(vec![2])));
    }

    #[test]
    fn polling_routes_waiting_packets_one_at_a_time() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal).receiving();
        let registry = Registry::new([&mut home as &mut dyn Application]).unwrap();
        let mut manager = AppManager::new(registry, &clock, HOME);
        manager.init();
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());
        let mut radio = FakeRadio::new();
        radio.inbox = vec![vec![1, 2, 3], vec![4]];
        let mut buffer = [0u8; 8];

        // When / Then
        assert!(router.poll(&mut radio, &mut manager, &mut buffer));
        assert!(router.poll(&mut radio, &mut manager, &mut buffer));
        assert!(!router.poll(&mut radio, &mut manager, &mut buffer));
        assert_eq!(
            journal.entries()[1..].to_vec(),
            vec![("home", Hook::Packet(vec![1, 2, 3])), ("home", Hook::Packet(vec![4]))]
        );
    }

    #[test]
    fn failing_radio_routes_nothing() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal);
        let registry = Registry::new([&mut home as &mut dyn Application]).unwrap();
        let mut manager = AppManager::new(registry, &clock, HOME);
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());
        let mut radio = FakeRadio::failing();

        // Then
        assert!(!router.poll(&mut radio, &mut manager, &mut [0u8; 8]));
        assert!(router.serial().text.is_empty());
    }

    struct OverreportingRadio;

    impl crate::hal::radio::Transceiver for OverreportingRadio {
        type Error = crate::hal::doubles::error::FakeError;
        fn is_present(&self) -> bool { true }
    }

    impl Packets for OverreportingRadio {
        fn transmit(&mut self, _: &[u8]) -> nb::Result<(), Self::Error> { Ok(()) }
        fn receive(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
            Ok(buffer.len() + 1)
        }
        fn receive_on(&mut self) -> nb::Result<(), Self::Error> { Ok(()) }
        fn receive_off(&mut self) -> nb::Result<(), Self::Error> { Ok(()) }
    }

    #[test]
    fn packets_longer_than_the_buffer_are_dropped() {
        // Given
        let journal = Journal::default();
        let clock = FakeClock::at(0);
        let mut home = RecordingApp::new("home", &journal).receiving();
        let registry = Registry::new([&mut home as &mut dyn Application]).unwrap();
        let mut manager = AppManager::new(registry, &clock, HOME);
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());

        // When
        let routed = router.poll(&mut OverreportingRadio, &mut manager, &mut [0u8; 4]);

        // Then
        assert!(!routed);
        assert!(journal.entries().is_empty());
        assert!(router.monitor().packets.is_empty());
    }
}
