//! Classroom clicker radio application.
//!
//! Talks the 905-925 MHz protocol used by classroom response clickers.
//! Activation programs the shared radio from a register table, tunes it
//! to the configured base station channel and calibrates it. Boards
//! without a radio skip the application altogether.
//!
//! Keys while active: `7` sends a test packet, `/` starts listening and
//! `0` stops listening.
use crate::{
    configuration,
    devices::{
        application::{Activation, Application, ExitDecision, Reception},
        register_table::{LoadRegisterTable, RegisterSetting, RegisterTable},
        traits::Radio,
    },
    error::Error,
    hal::radio::{register::*, State, Strobe},
};
use nb::block;

/// Clicker packets are fixed length.
pub const PACKET_LENGTH: usize = 0x3E;

const TEST_MESSAGE: &[u8] = b"\x01\x01Hello world";

/// 905.5 MHz base, 152.34 kbaud 2-FSK, 250 kHz channel spacing, fixed
/// length packets with no CRC or whitening, sync and address `0xB0`.
pub static SETTINGS: [RegisterSetting; 29] = [
    // IF setting
    RegisterSetting::new(FSCTRL1, 0x06),
    RegisterSetting::new(FSCTRL0, 0x00),
    // 905.5 MHz
    RegisterSetting::new(FREQ2, 0x22),
    RegisterSetting::new(FREQ1, 0xD3),
    RegisterSetting::new(FREQ0, 0xAC),
    RegisterSetting::new(CHANNR, 0x00),
    // 812.5 kHz channel bandwidth, 152.34 kbaud
    RegisterSetting::new(MDMCFG4, 0x1C),
    RegisterSetting::new(MDMCFG3, 0x80),
    // DC blocking, 2-FSK, 16/16 sync bits
    RegisterSetting::new(MDMCFG2, 0x02),
    // No FEC, 2 byte preamble, 250 kHz channel spacing
    RegisterSetting::new(MDMCFG1, 0x03),
    RegisterSetting::new(MDMCFG0, 0x3B),
    // 253.9 kHz deviation
    RegisterSetting::new(DEVIATN, 0x72),
    RegisterSetting::new(FREND1, 0x56),
    RegisterSetting::new(FREND0, 0x10),
    // Calibrate when leaving idle
    RegisterSetting::new(MCSM0, 0x14),
    RegisterSetting::new(MCSM1, 0x32),
    RegisterSetting::new(FSCAL3, 0xE9),
    RegisterSetting::new(FSCAL2, 0x2A),
    RegisterSetting::new(FSCAL1, 0x00),
    RegisterSetting::new(FSCAL0, 0x1F),
    RegisterSetting::new(TEST2, 0x88),
    RegisterSetting::new(TEST1, 0x31),
    // High VCO, upper 800/900 band
    RegisterSetting::new(TEST0, 0x09),
    // No preamble quality or address check
    RegisterSetting::new(PKTCTRL1, 0x04),
    // No whitening, no CRC, fixed packet length
    RegisterSetting::new(PKTCTRL0, 0x00),
    RegisterSetting::new(PKTLEN, PACKET_LENGTH as u8),
    RegisterSetting::new(SYNC1, 0xB0),
    RegisterSetting::new(SYNC0, 0xB0),
    RegisterSetting::new(ADDR, 0xB0),
];

/// Channel numbers indexed by the two letter base station code
/// (`[first - 'A'][second - 'A']`).
const CHANNEL_TABLE: [[u8; 4]; 4] =
    [[46, 30, 34, 38], [42, 54, 58, 62], [66, 70, 6, 10], [0, 14, 22, 18]];

const BASE_FREQUENCY_KHZ: u32 = 905_500;
const CHANNEL_SPACING_KHZ: u32 = 250;

/// A base station channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Channel(u8);

impl Channel {
    /// Resolves a two letter code such as `"DA"`. Letters run from `A`
    /// to `D`; anything else is rejected.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        let mut letters = code.bytes().map(|b| b.wrapping_sub(b'A') as usize);
        match (letters.next(), letters.next(), letters.next()) {
            (Some(row), Some(column), None) if row < 4 && column < 4 => {
                Ok(Channel(CHANNEL_TABLE[row][column]))
            }
            _ => Err(Error::InvalidChannel),
        }
    }

    pub fn number(&self) -> u8 { self.0 }

    pub fn frequency_khz(&self) -> u32 {
        BASE_FREQUENCY_KHZ + CHANNEL_SPACING_KHZ * self.0 as u32
    }
}

pub struct Clicker<R: Radio> {
    radio: R,
    channel: Channel,
    power: u8,
    state: Option<State>,
    received: u32,
    last_packet: [u8; PACKET_LENGTH],
    fault: Option<Error>,
}

impl<R: Radio> Clicker<R>
where
    Error: From<R::Error>,
{
    pub fn new(radio: R, channel: Channel, power: u8) -> Self {
        Self {
            radio,
            channel,
            power,
            state: None,
            received: 0,
            last_packet: [0; PACKET_LENGTH],
            fault: None,
        }
    }

    /// Clicker tuned as the build configuration says.
    pub fn configured(radio: R) -> Result<Self, Error> {
        let channel = Channel::from_code(configuration::CLICKER_CHANNEL)?;
        Ok(Self::new(radio, channel, configuration::CLICKER_POWER))
    }

    pub fn radio(&self) -> &R { &self.radio }

    pub fn channel(&self) -> Channel { self.channel }

    /// Last radio state seen by a draw tick.
    pub fn state(&self) -> Option<State> { self.state }

    pub fn received(&self) -> u32 { self.received }

    pub fn last_packet(&self) -> &[u8] { &self.last_packet }

    /// Most recent radio failure, if any.
    pub fn fault(&self) -> Option<Error> { self.fault }

    fn tune(&mut self) -> Result<(), Error> {
        block!(self.radio.power_on())?;
        block!(self.radio.strobe(Strobe::Idle))?;
        self.radio.load(&RegisterTable::new(&SETTINGS))?;
        block!(self.radio.write_power(self.power))?;
        block!(self.radio.write_register(CHANNR, self.channel.number()))?;
        block!(self.radio.strobe(Strobe::Idle))?;
        block!(self.radio.strobe(Strobe::Calibrate))?;
        Ok(())
    }

    fn shut_down(&mut self) -> Result<(), Error> {
        block!(self.radio.receive_off())?;
        block!(self.radio.power_off())?;
        Ok(())
    }

    fn poll(&mut self) -> Result<(), Error> {
        let state = block!(self.radio.state())?;
        self.state = Some(state);
        match state {
            // Re-arm the receiver so it keeps listening.
            State::RECEIVE => {
                block!(self.radio.strobe(Strobe::Idle))?;
                block!(self.radio.strobe(Strobe::Receive))?;
            }
            State::RECEIVE_OVERFLOW => {
                block!(self.radio.strobe(Strobe::FlushReceiveFifo))?;
                block!(self.radio.strobe(Strobe::Idle))?;
            }
            State::TRANSMIT_UNDERFLOW => {
                block!(self.radio.strobe(Strobe::FlushTransmitFifo))?;
                block!(self.radio.strobe(Strobe::Idle))?;
            }
            _ => (),
        }
        Ok(())
    }

    fn command(&mut self, key: char) -> Result<(), Error> {
        match key {
            '7' | '/' if block!(self.radio.state())? != State::IDLE => (),
            '7' => {
                let mut packet = [0u8; PACKET_LENGTH];
                packet[..TEST_MESSAGE.len()].copy_from_slice(TEST_MESSAGE);
                block!(self.radio.transmit(&packet))?;
            }
            '/' => block!(self.radio.receive_on())?,
            '0' => block!(self.radio.receive_off())?,
            _ => (),
        }
        Ok(())
    }

    fn record(&mut self, result: Result<(), Error>) {
        if let Err(error) = result {
            log_warn!("Clicker radio fault: {:?}", error);
            self.fault = Some(error);
        }
    }
}

impl<R: Radio> Application for Clicker<R>
where
    Error: From<R::Error>,
{
    fn name(&self) -> &'static str { "clicker" }

    fn init(&mut self) -> Activation {
        if !self.radio.is_present() {
            log_info!("No radio fitted, skipping the clicker.");
            return Activation::Skip;
        }
        log_info!("Tuning the clicker to {:?} kHz.", self.channel.frequency_khz());
        self.fault = None;
        let result = self.tune();
        self.record(result);
        Activation::Ready
    }

    fn draw(&mut self) {
        let result = self.poll();
        self.record(result);
    }

    fn exit(&mut self) -> ExitDecision {
        if self.radio.is_present() {
            let result = self.shut_down();
            self.record(result);
        }
        ExitDecision::Proceed
    }

    fn keypress(&mut self, key: char) {
        let result = self.command(key);
        self.record(result);
    }

    fn packet_rx(&mut self, packet: &[u8]) -> Reception {
        let length = packet.len().min(PACKET_LENGTH);
        self.last_packet = [0; PACKET_LENGTH];
        self.last_packet[..length].copy_from_slice(&packet[..length]);
        self.received = self.received.wrapping_add(1);
        Reception::Accepted
    }
}
