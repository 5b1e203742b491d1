//! # Watch Application Core
//!
//! This crate contains the application switching core of a small
//! handheld radio device in library form: the application contract,
//! the registry and manager that decide which application owns the
//! screen, and the router that hands inbound radio packets to either
//! the diagnostic monitor or the active application.
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

extern crate static_assertions;

#[macro_use]
pub mod utilities {
    mod macros;
}

pub mod configuration;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod hal;
#[cfg(target_arch = "arm")]
pub mod ports;
pub mod utility;
