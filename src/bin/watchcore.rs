#![cfg_attr(test, allow(unused_attributes))]
#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
use cortex_m_rt::{entry, exception};
#[cfg(target_arch = "arm")]
use defmt_rtt as _;
#[cfg(target_arch = "arm")]
use panic_semihosting as _;

#[cfg(target_arch = "arm")]
#[defmt::timestamp]
fn timestamp() -> u64 {
    use watchcore_lib::drivers::cortex_m::systick;
    systick::ticks() as u64
}

#[cfg(target_arch = "arm")]
#[exception]
fn SysTick() { watchcore_lib::drivers::cortex_m::systick::tick(); }

#[cfg(target_arch = "arm")]
#[entry]
fn main() -> ! { watchcore_lib::ports::watch::run() }

#[cfg(not(target_arch = "arm"))]
fn main() {}
