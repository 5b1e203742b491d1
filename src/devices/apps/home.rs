//! Clock face. The home application: the device falls back to it
//! after sitting idle and whenever it has to be recovered.
use crate::{
    devices::application::{Activation, Application},
    hal::time::{Minute, RealTimeClock},
};

pub struct Home<C: RealTimeClock> {
    clock: C,
    shown: Option<Minute>,
    redraws: u32,
}

impl<C: RealTimeClock> Home<C> {
    pub fn new(clock: C) -> Self { Self { clock, shown: None, redraws: 0 } }

    /// Minute currently on the face, if it has been drawn since the
    /// last activation.
    pub fn shown(&self) -> Option<Minute> { self.shown }

    /// Times the face actually changed.
    pub fn redraws(&self) -> u32 { self.redraws }
}

impl<C: RealTimeClock> Application for Home<C> {
    fn name(&self) -> &'static str { "home" }

    fn init(&mut self) -> Activation {
        // Force a full repaint on the first draw.
        self.shown = None;
        Activation::Ready
    }

    fn draw(&mut self) {
        let minute = self.clock.minute();
        if self.shown != Some(minute) {
            self.shown = Some(minute);
            self.redraws += 1;
        }
    }
}
