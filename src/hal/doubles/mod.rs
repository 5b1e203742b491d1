//! Host side stand-ins for the hardware interfaces, used by unit tests.
pub mod error;
pub mod radio;
pub mod serial;
pub mod time;
