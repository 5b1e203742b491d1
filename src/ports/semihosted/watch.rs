//! Generic Cortex-M board reached through a debugger: SysTick minute
//! clock, semihosting diagnostics, no radio fitted.
//!
//! The board has no keypad either. Nothing calls `keypress` or
//! `request_next`, so the device stays on its default application and
//! only the clock face, the idle timeout and the packet path run here.
//! Semihosting console reads block until the host answers, which would
//! stall the draw tick, so they are not used as a key source.
use crate::{
    devices::{
        app_manager::AppManager,
        application::Application,
        apps::{clicker::PACKET_LENGTH, Calculator, Clicker, Home},
        packet_router::PacketRouter,
        registry::Registry,
    },
    drivers::{
        absent_radio::NoTransceiver,
        cortex_m::{
            semihosting::{SemihostingMonitor, SemihostingSerial},
            systick::SysTick,
        },
        shared_radio::SharedRadio,
    },
    error::{Error, ReportOnUnwrap},
    hal::time::U32Ext,
};
use core::cell::RefCell;

/// Reset clock of most Cortex-M parts (internal RC oscillator).
pub const SYSCLK_HZ: u32 = 16_000_000;

pub fn run() -> ! {
    let mut serial = SemihostingSerial::new();
    let peripherals = cortex_m::Peripherals::take()
        .ok_or(Error::DriverError("Core peripherals taken twice"))
        .report_unwrap(&mut serial);
    let clock = SysTick::new(peripherals.SYST, SYSCLK_HZ.hz());

    let mut home = Home::new(&clock);
    let mut calculator = Calculator::new();
    let chip = RefCell::new(NoTransceiver);
    let mut clicker = Clicker::configured(SharedRadio::new(&chip)).report_unwrap(&mut serial);
    let registry = Registry::new([
        &mut home as &mut dyn Application,
        &mut calculator,
        &mut clicker,
    ])
    .report_unwrap(&mut serial);

    let mut manager = AppManager::configured(registry, &clock);
    let mut router = PacketRouter::new(SemihostingMonitor::new(), serial);
    let mut receiver = SharedRadio::new(&chip);
    let mut buffer = [0u8; PACKET_LENGTH];

    log_info!("Starting on {:?}.", manager.active_name());
    manager.init();
    loop {
        manager.draw_tick();
        while router.poll(&mut receiver, &mut manager, &mut buffer) {}
        cortex_m::asm::wfi();
    }
}
