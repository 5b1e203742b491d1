//! Applications shipped with the device.

pub mod calculator;
pub mod clicker;
pub mod home;

pub use calculator::Calculator;
pub use clicker::Clicker;
pub use home::Home;
