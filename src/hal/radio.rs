//! Packet radio interfaces.
//!
//! Modelled after CC1101 style sub-GHz transceivers: a bank of byte wide
//! configuration registers, single byte command strobes, a state machine
//! that can be polled, and packet FIFOs. Every operation is a short
//! synchronous bus transaction, exposed through `nb` so drivers may
//! report `WouldBlock` while the chip is busy.
use core::fmt;

/// Base interface every radio exposes.
pub trait Transceiver {
    type Error: Clone + Copy + fmt::Debug;

    /// Whether a radio is fitted and answering on this board. Boards
    /// are built with and without one from the same firmware.
    fn is_present(&self) -> bool;
}

pub trait Power: Transceiver {
    fn power_on(&mut self) -> nb::Result<(), Self::Error>;
    fn power_off(&mut self) -> nb::Result<(), Self::Error>;
}

pub trait Status: Transceiver {
    fn state(&mut self) -> nb::Result<State, Self::Error>;
}

pub trait Command: Transceiver {
    fn strobe(&mut self, strobe: Strobe) -> nb::Result<(), Self::Error>;
}

pub trait Registers: Transceiver {
    fn write_register(&mut self, address: u8, value: u8) -> nb::Result<(), Self::Error>;
    /// Programs the output power (PA table) byte.
    fn write_power(&mut self, power: u8) -> nb::Result<(), Self::Error>;
}

pub trait Packets: Transceiver {
    fn transmit(&mut self, packet: &[u8]) -> nb::Result<(), Self::Error>;
    /// Moves a waiting packet into `buffer`, returning its length.
    /// `WouldBlock` while nothing has arrived.
    fn receive(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error>;
    fn receive_on(&mut self) -> nb::Result<(), Self::Error>;
    fn receive_off(&mut self) -> nb::Result<(), Self::Error>;
}

/// Command strobes.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strobe {
    Reset = 0x30,
    FrequencySynthesizerOn = 0x31,
    CrystalOff = 0x32,
    Calibrate = 0x33,
    Receive = 0x34,
    Transmit = 0x35,
    Idle = 0x36,
    WakeOnRadio = 0x38,
    PowerDown = 0x39,
    FlushReceiveFifo = 0x3A,
    FlushTransmitFifo = 0x3B,
    ResetWakeOnRadio = 0x3C,
    NoOperation = 0x3D,
}

impl Strobe {
    pub fn command(self) -> u8 { self as u8 }
}

/// Radio state machine value, as read back from the chip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State(pub u8);

impl State {
    pub const SLEEP: State = State(0);
    pub const IDLE: State = State(1);
    pub const RECEIVE: State = State(13);
    pub const RECEIVE_OVERFLOW: State = State(17);
    pub const TRANSMIT: State = State(19);
    pub const TRANSMIT_UNDERFLOW: State = State(22);
}

/// Configuration register addresses.
pub mod register {
    pub const IOCFG2: u8 = 0x00;
    pub const IOCFG1: u8 = 0x01;
    pub const IOCFG0: u8 = 0x02;
    pub const FIFOTHR: u8 = 0x03;
    pub const SYNC1: u8 = 0x04;
    pub const SYNC0: u8 = 0x05;
    pub const PKTLEN: u8 = 0x06;
    pub const PKTCTRL1: u8 = 0x07;
    pub const PKTCTRL0: u8 = 0x08;
    pub const ADDR: u8 = 0x09;
    pub const CHANNR: u8 = 0x0A;
    pub const FSCTRL1: u8 = 0x0B;
    pub const FSCTRL0: u8 = 0x0C;
    pub const FREQ2: u8 = 0x0D;
    pub const FREQ1: u8 = 0x0E;
    pub const FREQ0: u8 = 0x0F;
    pub const MDMCFG4: u8 = 0x10;
    pub const MDMCFG3: u8 = 0x11;
    pub const MDMCFG2: u8 = 0x12;
    pub const MDMCFG1: u8 = 0x13;
    pub const MDMCFG0: u8 = 0x14;
    pub const DEVIATN: u8 = 0x15;
    pub const MCSM2: u8 = 0x16;
    pub const MCSM1: u8 = 0x17;
    pub const MCSM0: u8 = 0x18;
    pub const FREND1: u8 = 0x21;
    pub const FREND0: u8 = 0x22;
    pub const FSCAL3: u8 = 0x23;
    pub const FSCAL2: u8 = 0x24;
    pub const FSCAL1: u8 = 0x25;
    pub const FSCAL0: u8 = 0x26;
    pub const TEST2: u8 = 0x2C;
    pub const TEST1: u8 = 0x2D;
    pub const TEST0: u8 = 0x2E;
}
