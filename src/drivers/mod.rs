//! Driver implementations for the interfaces in [`hal`](crate::hal).
//! Host builds only get the portable ones; anything that touches core
//! peripherals is ARM only.

pub mod absent_radio;
pub mod shared_radio;

#[cfg(target_arch = "arm")]
pub mod cortex_m {
    pub mod semihosting;
    pub mod systick;
}
