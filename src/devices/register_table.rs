//! Register tables.
//!
//! Applications that need the shared radio in a particular mode describe
//! that mode as data: an ordered list of (address, value) register
//! writes, replayed into the chip when the application activates. The
//! length of a table is the length of its slice, so writing zero to
//! register zero is as valid as any other setting.
//!
//! Tables exported by older tooling come as a flat byte stream of
//! address/value pairs closed by a `(0, 0)` pair; [`legacy_pairs`]
//! decodes those.
use crate::{hal::radio::Registers, utility::IntoPairs};
use nb::block;

/// A single register write.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterSetting {
    pub address: u8,
    pub value: u8,
}

impl RegisterSetting {
    pub const fn new(address: u8, value: u8) -> Self { Self { address, value } }
}

/// Ordered set of register writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterTable<'a> {
    settings: &'a [RegisterSetting],
}

impl<'a> RegisterTable<'a> {
    pub const fn new(settings: &'a [RegisterSetting]) -> Self { Self { settings } }

    pub fn len(&self) -> usize { self.settings.len() }

    pub fn is_empty(&self) -> bool { self.settings.is_empty() }

    pub fn settings(&self) -> impl Iterator<Item = RegisterSetting> + 'a {
        self.settings.iter().copied()
    }

    /// Value the table leaves in `address`, if it writes to it at all.
    /// Later writes win.
    pub fn value_of(&self, address: u8) -> Option<u8> {
        self.settings.iter().rev().find(|s| s.address == address).map(|s| s.value)
    }
}

/// Decodes a `(0, 0)` terminated byte stream of address/value pairs.
/// Decoding stops at the terminator or at the end of the input; a
/// dangling odd byte is ignored.
pub fn legacy_pairs(bytes: &[u8]) -> impl Iterator<Item = RegisterSetting> + '_ {
    bytes
        .iter()
        .copied()
        .pairs()
        .take_while(|&pair| pair != (0, 0))
        .map(|(address, value)| RegisterSetting { address, value })
}

/// Replays register tables into a radio.
pub trait LoadRegisterTable: Registers {
    /// Writes every setting in order, stopping at the first failure.
    fn load(&mut self, table: &RegisterTable) -> Result<(), Self::Error> {
        table.settings().try_for_each(|s| block!(self.write_register(s.address, s.value)))
    }

    /// Writes a legacy `(0, 0)` terminated table, returning how many
    /// settings were written.
    fn load_legacy(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        legacy_pairs(bytes).try_fold(0, |written, s| {
            block!(self.write_register(s.address, s.value)).map(|_| written + 1)
        })
    }
}

impl<R: Registers> LoadRegisterTable for R {}
