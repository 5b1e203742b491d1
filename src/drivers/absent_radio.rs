//! Stand-in transceiver for boards built without a radio.
//!
//! Reports itself as absent, so radio applications step aside, and
//! fails every operation in case something drives it anyway.
use crate::{
    error::{Convertible, Error},
    hal::radio::{Command, Packets, Power, Registers, State, Status, Strobe, Transceiver},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTransceiver;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NotFitted;

impl Convertible for NotFitted {
    fn into(self) -> Error { Error::RadioAbsent }
}

impl Transceiver for NoTransceiver {
    type Error = NotFitted;
    fn is_present(&self) -> bool { false }
}

impl Power for NoTransceiver {
    fn power_on(&mut self) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
    fn power_off(&mut self) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
}

impl Status for NoTransceiver {
    fn state(&mut self) -> nb::Result<State, NotFitted> { Err(nb::Error::Other(NotFitted)) }
}

impl Command for NoTransceiver {
    fn strobe(&mut self, _: Strobe) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
}

impl Registers for NoTransceiver {
    fn write_register(&mut self, _: u8, _: u8) -> nb::Result<(), NotFitted> {
        Err(nb::Error::Other(NotFitted))
    }
    fn write_power(&mut self, _: u8) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
}

impl Packets for NoTransceiver {
    fn transmit(&mut self, _: &[u8]) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
    // Nothing ever arrives.
    fn receive(&mut self, _: &mut [u8]) -> nb::Result<usize, NotFitted> { Err(nb::Error::WouldBlock) }
    fn receive_on(&mut self) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
    fn receive_off(&mut self) -> nb::Result<(), NotFitted> { Err(nb::Error::Other(NotFitted)) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::devices::{
        application::{Activation, Application},
        apps::Clicker,
        register_table::LoadRegisterTable,
    };

    #[test]
    fn clicker_steps_aside_without_a_radio() {
        // Given
        let mut clicker = Clicker::configured(NoTransceiver).unwrap();

        // Then
        assert_eq!(Activation::Skip, clicker.init());
        assert_eq!(None, clicker.fault());
    }

    #[test]
    fn every_operation_reports_the_missing_radio() {
        // Given
        let mut radio = NoTransceiver;

        // Then
        assert!(!radio.is_present());
        assert_eq!(Err(NotFitted), radio.load_legacy(&[0x0B, 0x06, 0x00, 0x00]));
        assert!(matches!(radio.power_on(), Err(nb::Error::Other(NotFitted))));
        assert!(matches!(radio.receive(&mut [0u8; 4]), Err(nb::Error::WouldBlock)));
        assert_eq!(Error::RadioAbsent, Error::from(NotFitted));
    }
}
