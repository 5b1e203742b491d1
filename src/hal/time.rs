//! Time units and real-time clock access.

/// Minute field of the real-time clock, cycling through `0..60`.
#[derive(Clone, Copy, Debug, Default, PartialOrd, Ord, PartialEq, Eq)]
pub struct Minute(pub u8);

/// Seconds, as counted by tick based clocks.
#[derive(Clone, Copy, Debug, Default, PartialOrd, Ord, PartialEq, Eq)]
pub struct Seconds(pub u32);

/// Hertz
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct Hertz(pub u32);

/// A clock that can be asked which minute it is. Reads are cheap and
/// never block, so they are safe to issue from every draw tick.
pub trait RealTimeClock {
    fn minute(&self) -> Minute;
}

/// Lets a single clock be shared by reference between the manager and
/// the applications that display the time.
impl<C: RealTimeClock + ?Sized> RealTimeClock for &C {
    fn minute(&self) -> Minute { (**self).minute() }
}

impl From<Seconds> for Minute {
    fn from(seconds: Seconds) -> Self { Minute(((seconds.0 / 60) % 60) as u8) }
}

/// Extension trait that adds convenience methods to the `u32` type
pub trait U32Ext {
    /// Wrap in `Hertz`
    fn hz(self) -> Hertz;

    /// Wrap in `Seconds`
    fn s(self) -> Seconds;
}

impl U32Ext for u32 {
    fn hz(self) -> Hertz { Hertz(self) }

    fn s(self) -> Seconds { Seconds(self) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn minutes_wrap_every_hour() {
        assert_eq!(Minute(0), Minute::from(59u32.s()));
        assert_eq!(Minute(1), Minute::from(60u32.s()));
        assert_eq!(Minute(59), Minute::from(3599u32.s()));
        assert_eq!(Minute(0), Minute::from(3600u32.s()));
        assert_eq!(Minute(2), Minute::from((3600u32 + 125).s()));
    }
}
