//! Minute clock counted from SysTick exceptions.
//!
//! The port installs a `SysTick` exception handler that calls [`tick`].
use crate::hal::time::{Hertz, Minute, RealTimeClock, Seconds};
use core::cell::Cell;
use cortex_m::{
    interrupt::{self, Mutex},
    peripheral::{syst::SystClkSource, SYST},
};

/// Exception rate. Keeps the reload value inside SysTick's 24 bits for
/// any core clock up to 1.6 GHz.
pub const TICKS_PER_SECOND: u32 = 100;

static TICKS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Advances the clock by one tick. Call from the SysTick handler only.
pub fn tick() {
    interrupt::free(|cs| {
        let ticks = TICKS.borrow(cs);
        ticks.set(ticks.get().wrapping_add(1));
    });
}

/// Ticks counted since start up.
pub fn ticks() -> u32 { interrupt::free(|cs| TICKS.borrow(cs).get()) }

pub struct SysTick {
    _syst: SYST,
}

impl SysTick {
    /// Starts counting, given the frequency the core is running at.
    pub fn new(mut syst: SYST, sysclk: Hertz) -> Self {
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(sysclk.0 / TICKS_PER_SECOND - 1);
        syst.clear_current();
        syst.enable_counter();
        syst.enable_interrupt();
        Self { _syst: syst }
    }

    pub fn seconds(&self) -> Seconds {
        Seconds(ticks() / TICKS_PER_SECOND)
    }
}

impl RealTimeClock for SysTick {
    fn minute(&self) -> Minute { self.seconds().into() }
}
