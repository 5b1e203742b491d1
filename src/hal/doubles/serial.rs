use std::{convert::Infallible, string::String};

/// Diagnostic channel that keeps everything written to it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSerial {
    pub text: String,
}

impl RecordingSerial {
    pub fn lines(&self) -> impl Iterator<Item = &str> { self.text.lines() }
}

impl ufmt::uWrite for RecordingSerial {
    type Error = Infallible;
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.text.push_str(s);
        Ok(())
    }
}
