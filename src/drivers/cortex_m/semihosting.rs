//! Diagnostic serial and packet monitor over ARM semihosting.
use crate::devices::packet_router::Monitor;
use core::sync::atomic::{AtomicBool, Ordering};
use cortex_m_semihosting::hio::{self, HStdout};
use ufmt::{uWrite, uwrite, uwriteln};

static DIAGNOSTIC_MODE: AtomicBool = AtomicBool::new(false);

/// Writes to the debugger console. Text is silently lost when no
/// debugger is attached.
pub struct SemihostingSerial {
    stdout: Option<HStdout>,
}

impl SemihostingSerial {
    pub fn new() -> Self { Self { stdout: hio::hstdout().ok() } }
}

impl Default for SemihostingSerial {
    fn default() -> Self { Self::new() }
}

impl uWrite for SemihostingSerial {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), ()> {
        match self.stdout.as_mut() {
            Some(stdout) => stdout.write_all(s.as_bytes()),
            None => Err(()),
        }
    }
}

/// Dumps every packet to the debugger console as hex while diagnostic
/// mode is on.
pub struct SemihostingMonitor {
    serial: SemihostingSerial,
}

impl SemihostingMonitor {
    pub fn new() -> Self { Self { serial: SemihostingSerial::new() } }

    pub fn enter_diagnostic_mode() { DIAGNOSTIC_MODE.store(true, Ordering::SeqCst) }

    pub fn leave_diagnostic_mode() { DIAGNOSTIC_MODE.store(false, Ordering::SeqCst) }
}

impl Default for SemihostingMonitor {
    fn default() -> Self { Self::new() }
}

impl Monitor for SemihostingMonitor {
    fn is_active(&self) -> bool { DIAGNOSTIC_MODE.load(Ordering::SeqCst) }

    fn forward(&mut self, packet: &[u8]) {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        uwrite!(self.serial, "RX {}:", packet.len()).ok();
        for byte in packet {
            let high = DIGITS[(byte >> 4) as usize] as char;
            let low = DIGITS[(byte & 0x0F) as usize] as char;
            uwrite!(self.serial, " {}{}", high, low).ok();
        }
        uwriteln!(self.serial, "").ok();
    }
}
