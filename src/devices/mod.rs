//! Complex modules with business logic related to the problem
//! domain, that lay on top of abstract drivers. Devices are
//! generic, while board specifics (which clock, which radio, which
//! applications) are handled in the `ports` module.

pub mod app_manager;
pub mod application;
pub mod apps;
pub mod packet_router;
pub mod register_table;
pub mod registry;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;

/// General purpose traits that summarize requirements on devices.
pub mod traits {
    use crate::hal::radio;
    use marker_blanket::marker_blanket;

    /// A supported radio must be able to power up and down, report its
    /// state, take command strobes, be programmed register by register
    /// and move packets.
    #[marker_blanket]
    pub trait Radio:
        radio::Power + radio::Status + radio::Command + radio::Registers + radio::Packets
    {
    }
}
