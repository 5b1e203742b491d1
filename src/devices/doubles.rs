//! Application stand-ins for manager and router tests.
use super::application::{Activation, Application, ExitDecision, Reception};
use std::{cell::RefCell, vec::Vec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hook {
    Init,
    Draw,
    Exit,
    Key(char),
    Packet(Vec<u8>),
}

/// Shared, ordered record of every hook invoked on a set of
/// applications.
#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<(&'static str, Hook)>>,
}

impl Journal {
    pub fn entries(&self) -> Vec<(&'static str, Hook)> { self.entries.borrow().clone() }

    pub fn count(&self, name: &str, hook: &Hook) -> usize {
        self.entries.borrow().iter().filter(|(n, h)| *n == name && h == hook).count()
    }

    pub fn clear(&self) { self.entries.borrow_mut().clear() }

    fn push(&self, name: &'static str, hook: Hook) { self.entries.borrow_mut().push((name, hook)) }
}

pub struct RecordingApp<'j> {
    name: &'static str,
    journal: &'j Journal,
    exit: ExitDecision,
    activation: Activation,
    receives: bool,
}

impl<'j> RecordingApp<'j> {
    pub fn new(name: &'static str, journal: &'j Journal) -> Self {
        Self {
            name,
            journal,
            exit: ExitDecision::Proceed,
            activation: Activation::Ready,
            receives: false,
        }
    }

    /// Refuses every voluntary transition away from it.
    pub fn vetoing(self) -> Self { Self { exit: ExitDecision::Vetoed, ..self } }

    /// Asks to be skipped whenever it is activated.
    pub fn skipping(self) -> Self { Self { activation: Activation::Skip, ..self } }

    /// Accepts inbound packets.
    pub fn receiving(self) -> Self { Self { receives: true, ..self } }
}

impl<'j> Application for RecordingApp<'j> {
    fn name(&self) -> &'static str { self.name }

    fn init(&mut self) -> Activation {
        self.journal.push(self.name, Hook::Init);
        self.activation
    }

    fn draw(&mut self) { self.journal.push(self.name, Hook::Draw) }

    fn exit(&mut self) -> ExitDecision {
        self.journal.push(self.name, Hook::Exit);
        self.exit
    }

    fn keypress(&mut self, key: char) { self.journal.push(self.name, Hook::Key(key)) }

    fn packet_rx(&mut self, packet: &[u8]) -> Reception {
        if !self.receives {
            return Reception::Unsupported;
        }
        self.journal.push(self.name, Hook::Packet(packet.to_vec()));
        Reception::Accepted
    }
}

/// Wraps a real application, journaling every hook before handing it on.
pub struct Observed<'j, A: Application> {
    inner: A,
    journal: &'j Journal,
}

impl<'j, A: Application> Observed<'j, A> {
    pub fn new(inner: A, journal: &'j Journal) -> Self { Self { inner, journal } }

    pub fn inner(&self) -> &A { &self.inner }
}

impl<'j, A: Application> Application for Observed<'j, A> {
    fn name(&self) -> &'static str { self.inner.name() }

    fn init(&mut self) -> Activation {
        self.journal.push(self.inner.name(), Hook::Init);
        self.inner.init()
    }

    fn draw(&mut self) {
        self.journal.push(self.inner.name(), Hook::Draw);
        self.inner.draw()
    }

    fn exit(&mut self) -> ExitDecision {
        self.journal.push(self.inner.name(), Hook::Exit);
        self.inner.exit()
    }

    fn keypress(&mut self, key: char) {
        self.journal.push(self.inner.name(), Hook::Key(key));
        self.inner.keypress(key)
    }

    fn packet_rx(&mut self, packet: &[u8]) -> Reception {
        self.journal.push(self.inner.name(), Hook::Packet(packet.to_vec()));
        self.inner.packet_rx(packet)
    }
}
