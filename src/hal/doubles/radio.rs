use super::error::FakeError;
use crate::hal::radio::{Command, Packets, Power, Registers, State, Status, Strobe, Transceiver};
use std::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    PowerOn,
    PowerOff,
    Strobe(Strobe),
    Register(u8, u8),
    Power(u8),
    Transmit(Vec<u8>),
    ReceiveOn,
    ReceiveOff,
}

/// Radio that records every operation issued to it.
#[derive(Clone, Debug)]
pub struct FakeRadio {
    pub present: bool,
    pub failing: bool,
    pub state: State,
    pub operations: Vec<Operation>,
    /// Packets waiting to be received, oldest first.
    pub inbox: Vec<Vec<u8>>,
}

impl FakeRadio {
    pub fn new() -> Self {
        Self { present: true, failing: false, state: State::IDLE, operations: Vec::new(), inbox: Vec::new() }
    }

    pub fn absent() -> Self { Self { present: false, ..Self::new() } }

    pub fn failing() -> Self { Self { failing: true, ..Self::new() } }

    pub fn registers(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.operations.iter().filter_map(|o| match o {
            Operation::Register(address, value) => Some((*address, *value)),
            _ => None,
        })
    }

    fn record(&mut self, operation: Operation) -> nb::Result<(), FakeError> {
        if self.failing {
            return Err(nb::Error::Other(FakeError));
        }
        self.operations.push(operation);
        Ok(())
    }
}

impl Default for FakeRadio {
    fn default() -> Self { Self::new() }
}

impl Transceiver for FakeRadio {
    type Error = FakeError;
    fn is_present(&self) -> bool { self.present }
}

impl Power for FakeRadio {
    fn power_on(&mut self) -> nb::Result<(), Self::Error> { self.record(Operation::PowerOn) }
    fn power_off(&mut self) -> nb::Result<(), Self::Error> { self.record(Operation::PowerOff) }
}

impl Status for FakeRadio {
    fn state(&mut self) -> nb::Result<State, Self::Error> {
        if self.failing {
            Err(nb::Error::Other(FakeError))
        } else {
            Ok(self.state)
        }
    }
}

impl Command for FakeRadio {
    fn strobe(&mut self, strobe: Strobe) -> nb::Result<(), Self::Error> {
        self.record(Operation::Strobe(strobe))
    }
}

impl Registers for FakeRadio {
    fn write_register(&mut self, address: u8, value: u8) -> nb::Result<(), Self::Error> {
        self.record(Operation::Register(address, value))
    }
    fn write_power(&mut self, power: u8) -> nb::Result<(), Self::Error> {
        self.record(Operation::Power(power))
    }
}

impl Packets for FakeRadio {
    fn transmit(&mut self, packet: &[u8]) -> nb::Result<(), Self::Error> {
        self.record(Operation::Transmit(packet.to_vec()))
    }
    fn receive(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        if self.failing {
            return Err(nb::Error::Other(FakeError));
        }
        if self.inbox.is_empty() {
            return Err(nb::Error::WouldBlock);
        }
        let packet = self.inbox.remove(0);
        let length = packet.len().min(buffer.len());
        buffer[..length].copy_from_slice(&packet[..length]);
        Ok(length)
    }
    fn receive_on(&mut self) -> nb::Result<(), Self::Error> { self.record(Operation::ReceiveOn) }
    fn receive_off(&mut self) -> nb::Result<(), Self::Error> { self.record(Operation::ReceiveOff) }
}
