//! Watch core error types and methods
//!
//! None of the application switching operations return errors; the
//! device has to stay responsive whatever happens. Errors only surface
//! while assembling a registry, and inside applications that talk to
//! hardware, where they are logged and reported over the diagnostic
//! channel instead of propagating.

use crate::hal::serial::Write;
#[cfg(target_arch = "arm")]
use defmt::Format;
use ufmt::uwriteln;

/// Top level error type for the watch core. Unlike the specific
/// driver errors, this error contains textual descriptions of the
/// problem as it is meant to be directly reported through the
/// diagnostic channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(Format))]
pub enum Error {
    /// Error caused by a low level peripheral driver
    DriverError(&'static str),
    /// Error caused by a faulty configuration
    ConfigurationError(&'static str),
    /// Error caused by a high level device driver
    DeviceError(&'static str),
    RegistryEmpty,
    InvalidChannel,
    RadioAbsent,
}

pub trait Convertible {
    fn into(self) -> Error;
}

impl<T: Convertible> From<T> for Error {
    fn from(t: T) -> Self { t.into() }
}

/// Exposes a report_unwrap() method that behaves like
/// unwrap(), but also reports any errors via serial before panicking.
pub trait ReportOnUnwrap<T, S: Write> {
    fn report_unwrap(self, serial: &mut S) -> T;
}

impl<T, S: Write> ReportOnUnwrap<T, S> for Result<T, Error> {
    fn report_unwrap(self, serial: &mut S) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                error.report(serial);
                panic!();
            }
        }
    }
}

impl Error {
    /// Reports error via abstract serial device
    pub fn report<S: Write>(&self, serial: &mut S) {
        match self {
            Error::DriverError(text) => uwriteln!(serial, "[Driver Error] -> {}", *text),
            Error::ConfigurationError(text) => {
                uwriteln!(serial, "[Configuration Error] -> {}", *text)
            }
            Error::DeviceError(text) => uwriteln!(serial, "[Device Error] -> {}", *text),
            Error::RegistryEmpty => {
                uwriteln!(serial, "[Logic Error] -> Registry holds no home application")
            }
            Error::InvalidChannel => {
                uwriteln!(serial, "[Logic Error] -> Channel code is not in the channel table")
            }
            Error::RadioAbsent => {
                uwriteln!(serial, "[Logic Error] -> No radio fitted to this device")
            }
        }
        .ok();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::serial::RecordingSerial;

    #[test]
    fn errors_report_with_category_prefix() {
        // Given
        let mut serial = RecordingSerial::default();

        // When
        Error::DriverError("[Radio] Strobe failed").report(&mut serial);
        Error::InvalidChannel.report(&mut serial);

        // Then
        assert_eq!(
            serial.lines().collect::<Vec<_>>(),
            vec![
                "[Driver Error] -> [Radio] Strobe failed",
                "[Logic Error] -> Channel code is not in the channel table",
            ]
        );
    }

    #[test]
    #[should_panic]
    fn report_unwrap_panics_after_reporting() {
        let mut serial = RecordingSerial::default();
        let result: Result<(), Error> = Err(Error::RegistryEmpty);
        result.report_unwrap(&mut serial);
    }
}
