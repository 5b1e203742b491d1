//! Diagnostic serial channel.
//!
//! Anything the device has to say to a developer (missing packet
//! handlers, driver failures) is written as formatted text through
//! this interface. On hardware it is a UART or a debugger channel.
use marker_blanket::marker_blanket;

/// Text sink for diagnostic reports, written to with `ufmt` macros.
#[marker_blanket]
pub trait Write: ufmt::uWrite {}
