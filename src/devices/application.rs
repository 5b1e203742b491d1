//! Application contract.
//!
//! An application is one self-contained screen of the device (clock,
//! calculator, radio tools...). Applications share the display, keypad
//! and radio, so exactly one of them is active at any time. The
//! [`AppManager`](super::app_manager::AppManager) drives them through
//! the lifecycle hooks below; every hook has a default that does
//! nothing, so an application only implements what it cares about.

/// Outcome of asking an application whether it can be left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitDecision {
    /// The application is ready to hand over the device.
    Proceed,
    /// The application refuses a voluntary transition (e.g. unsaved
    /// work). Forced transitions ignore this.
    Vetoed,
}

/// Outcome of activating an application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The application took over the device.
    Ready,
    /// The application cannot run on this device (missing hardware)
    /// and asks to be skipped in favour of the next one.
    Skip,
}

/// Outcome of offering an inbound packet to an application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reception {
    /// The application took the packet. Whether it made sense of it is
    /// the application's business.
    Accepted,
    /// The application has no packet handler; the packet is dropped.
    Unsupported,
}

pub trait Application {
    /// Human readable identifier, used only in diagnostics.
    fn name(&self) -> &'static str;

    /// Invoked every time the application becomes active.
    fn init(&mut self) -> Activation { Activation::Ready }

    /// Invoked on every draw tick while active.
    fn draw(&mut self) {}

    /// Invoked when the application is about to be left. The decision
    /// is only honoured for voluntary transitions.
    fn exit(&mut self) -> ExitDecision { ExitDecision::Proceed }

    /// Invoked for every key pressed while active.
    fn keypress(&mut self, _key: char) {}

    /// Invoked for every inbound packet while active, unless the
    /// diagnostic monitor claims it first.
    fn packet_rx(&mut self, _packet: &[u8]) -> Reception { Reception::Unsupported }
}
