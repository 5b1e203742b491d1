use crate::hal::time::{Minute, RealTimeClock};
use core::cell::Cell;

/// Clock whose minute is set by hand. Shared by reference, so a test
/// can move time forward while a manager holds on to it.
#[derive(Debug, Default)]
pub struct FakeClock {
    minute: Cell<u8>,
}

impl FakeClock {
    pub fn at(minute: u8) -> Self { Self { minute: Cell::new(minute) } }
    pub fn set(&self, minute: u8) { self.minute.set(minute % 60) }
    pub fn advance(&self) { self.set(self.minute.get() + 1) }
}

impl RealTimeClock for FakeClock {
    fn minute(&self) -> Minute { Minute(self.minute.get()) }
}
