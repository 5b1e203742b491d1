//! One transceiver, several users.
//!
//! The radio application programs the chip while the main loop drains
//! its receive FIFO. Both hold a [`SharedRadio`] over the same cell. A
//! handle that finds the chip borrowed by another reports `WouldBlock`.
use crate::hal::radio::{Command, Packets, Power, Registers, State, Status, Strobe, Transceiver};
use core::cell::RefCell;

pub struct SharedRadio<'a, R> {
    radio: &'a RefCell<R>,
}

impl<'a, R> SharedRadio<'a, R> {
    pub fn new(radio: &'a RefCell<R>) -> Self { Self { radio } }
}

impl<'a, R> Clone for SharedRadio<'a, R> {
    fn clone(&self) -> Self { Self { radio: self.radio } }
}

impl<'a, R> Copy for SharedRadio<'a, R> {}

impl<'a, R> SharedRadio<'a, R> {
    fn with<T, E>(&self, operation: impl FnOnce(&mut R) -> nb::Result<T, E>) -> nb::Result<T, E> {
        let mut radio = self.radio.try_borrow_mut().map_err(|_| nb::Error::WouldBlock)?;
        operation(&mut *radio)
    }
}

impl<'a, R: Transceiver> Transceiver for SharedRadio<'a, R> {
    type Error = R::Error;
    fn is_present(&self) -> bool { self.radio.try_borrow().map_or(false, |r| r.is_present()) }
}

impl<'a, R: Power> Power for SharedRadio<'a, R> {
    fn power_on(&mut self) -> nb::Result<(), Self::Error> { self.with(|r| r.power_on()) }
    fn power_off(&mut self) -> nb::Result<(), Self::Error> { self.with(|r| r.power_off()) }
}

impl<'a, R: Status> Status for SharedRadio<'a, R> {
    fn state(&mut self) -> nb::Result<State, Self::Error> { self.with(|r| r.state()) }
}

impl<'a, R: Command> Command for SharedRadio<'a, R> {
    fn strobe(&mut self, strobe: Strobe) -> nb::Result<(), Self::Error> {
        self.with(|r| r.strobe(strobe))
    }
}

impl<'a, R: Registers> Registers for SharedRadio<'a, R> {
    fn write_register(&mut self, address: u8, value: u8) -> nb::Result<(), Self::Error> {
        self.with(|r| r.write_register(address, value))
    }
    fn write_power(&mut self, power: u8) -> nb::Result<(), Self::Error> {
        self.with(|r| r.write_power(power))
    }
}

impl<'a, R: Packets> Packets for SharedRadio<'a, R> {
    fn transmit(&mut self, packet: &[u8]) -> nb::Result<(), Self::Error> {
        self.with(|r| r.transmit(packet))
    }
    fn receive(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.with(|r| r.receive(buffer))
    }
    fn receive_on(&mut self) -> nb::Result<(), Self::Error> { self.with(|r| r.receive_on()) }
    fn receive_off(&mut self) -> nb::Result<(), Self::Error> { self.with(|r| r.receive_off()) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        devices::{
            app_manager::AppManager,
            application::{Activation, Application},
            apps::{clicker::Channel, Clicker},
            packet_router::{doubles::RecordingMonitor, PacketRouter},
            registry::Registry,
        },
        hal::doubles::{
            radio::{FakeRadio, Operation},
            serial::RecordingSerial,
            time::FakeClock,
        },
    };

    #[test]
    fn clicker_and_router_drive_the_same_chip() {
        // Given
        let chip = RefCell::new(FakeRadio::new());
        let clock = FakeClock::at(0);
        let mut home = crate::devices::apps::Home::new(&clock);
        let mut clicker = Clicker::new(SharedRadio::new(&chip), Channel::from_code("DA").unwrap(), 0x25);
        let registry = Registry::new([&mut home as &mut dyn Application, &mut clicker]).unwrap();
        let mut manager = AppManager::new(registry, &clock, 1);
        let mut router = PacketRouter::new(RecordingMonitor::default(), RecordingSerial::default());
        let mut receiver = SharedRadio::new(&chip);

        // When
        manager.init();
        chip.borrow_mut().inbox.push(vec![0xB0, 0x01]);
        let routed = router.poll(&mut receiver, &mut manager, &mut [0u8; 8]);

        // Then
        assert!(routed);
        assert_eq!(Some(&Operation::PowerOn), chip.borrow().operations.first());
        assert!(chip.borrow().inbox.is_empty());
        assert!(router.serial().text.is_empty());
    }

    #[test]
    fn busy_chip_would_block() {
        // Given
        let chip = RefCell::new(FakeRadio::new());
        let mut radio = SharedRadio::new(&chip);
        let _held = chip.borrow_mut();

        // Then
        assert!(matches!(radio.power_on(), Err(nb::Error::WouldBlock)));
        assert!(!radio.is_present());
    }

    #[test]
    fn missing_chip_is_seen_through_the_handle() {
        // Given
        let chip = RefCell::new(FakeRadio::absent());
        let mut clicker = Clicker::new(SharedRadio::new(&chip), Channel::from_code("DA").unwrap(), 0x25);

        // Then
        assert_eq!(Activation::Skip, clicker.init());
    }
}
