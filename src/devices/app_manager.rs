//! Application manager.
//!
//! Owns the index of the active application and decides when it
//! changes. Transitions come in two flavours:
//!
//! * Voluntary ([`AppManager::request_next`]), bound to the mode key.
//!   The active application may veto them from its `exit` hook.
//! * Forced ([`AppManager::force_home`]), used by the idle timeout. The
//!   active application is told it is being left, but cannot refuse.
//!
//! Idle time is measured in minute boundaries of the real-time clock,
//! observed from the draw tick. Any explicit activity clears it.
use super::{
    application::{Activation, Application, ExitDecision},
    registry::{Registry, HOME},
};
use crate::{
    configuration,
    hal::time::{Minute, RealTimeClock},
};

pub struct AppManager<'a, C: RealTimeClock, const N: usize> {
    registry: Registry<'a, N>,
    clock: C,
    active: usize,
    idle_minutes: u16,
    last_seen_minute: Minute,
    idle_threshold: u8,
    fell_back: bool,
}

impl<'a, C: RealTimeClock, const N: usize> AppManager<'a, C, N> {
    /// Creates a manager that will start on `default_index`. An index
    /// outside the registry falls back to the home application.
    pub fn new(registry: Registry<'a, N>, clock: C, default_index: usize) -> Self {
        let fell_back = !registry.contains(default_index);
        if fell_back {
            log_warn!("Application {:?} is not registered, falling back to home.", default_index);
        }
        let last_seen_minute = clock.minute();
        Self {
            registry,
            clock,
            active: if fell_back { HOME } else { default_index },
            idle_minutes: 0,
            last_seen_minute,
            idle_threshold: configuration::IDLE_TIMEOUT_MINUTES,
            fell_back,
        }
    }

    /// Creates a manager starting on the configured default application.
    pub fn configured(registry: Registry<'a, N>, clock: C) -> Self {
        Self::new(registry, clock, configuration::DEFAULT_APPLICATION)
    }

    /// Overrides how many minute boundaries the device may sit idle
    /// before returning home. The timeout trips on exceeding it.
    pub fn with_idle_threshold(self, idle_threshold: u8) -> Self { Self { idle_threshold, ..self } }

    /// Activates the starting application. When the configured default
    /// was unusable, the manager only settles on home.
    pub fn init(&mut self) {
        self.last_seen_minute = self.clock.minute();
        self.clear_idle_timer();
        // An unusable default only skips the very first activation.
        if core::mem::take(&mut self.fell_back) {
            return;
        }
        self.enter(self.active);
    }

    /// One refresh cycle: idle bookkeeping, then the active application
    /// draws.
    pub fn draw_tick(&mut self) {
        let minute = self.clock.minute();
        if minute != self.last_seen_minute {
            self.last_seen_minute = minute;
            self.idle_minutes = self.idle_minutes.saturating_add(1);
        }

        if self.idle_minutes > u16::from(self.idle_threshold) {
            log_info!("Idle for {:?} minutes, returning home.", self.idle_minutes);
            self.clear_idle_timer();
            self.force_home();
        }

        self.registry[self.active].draw();
    }

    /// Moves on to the next application in walking order, unless the
    /// active one vetoes.
    pub fn request_next(&mut self) {
        self.clear_idle_timer();
        if self.registry[self.active].exit() == ExitDecision::Vetoed {
            log_info!("{:?} refused to be left.", self.active_name());
            return;
        }
        self.enter(self.registry.next_index(self.active));
    }

    /// Returns to the home application. The exit hook still runs but
    /// its decision is ignored.
    pub fn force_home(&mut self) {
        log_info!("Forcing {:?} back home.", self.active_name());
        let _ = self.registry[self.active].exit();
        self.enter(HOME);
    }

    pub fn clear_idle_timer(&mut self) { self.idle_minutes = 0; }

    /// Any key counts as activity; the key itself belongs to the active
    /// application.
    pub fn keypress(&mut self, key: char) {
        self.clear_idle_timer();
        self.registry[self.active].keypress(key);
    }

    pub fn active_index(&self) -> usize { self.active }

    pub fn active_name(&self) -> &'static str { self.registry[self.active].name() }

    pub fn idle_minutes(&self) -> u16 { self.idle_minutes }

    pub fn registry(&self) -> &Registry<'a, N> { &self.registry }

    pub(crate) fn active_application(&mut self) -> &mut (dyn Application + 'a) {
        &mut self.registry[self.active]
    }

    /// Makes `index` active and initializes it. Applications that ask to
    /// be skipped are left the same way `request_next` would leave them,
    /// at most once per registered application.
    fn enter(&mut self, index: usize) {
        self.active = index;
        self.clear_idle_timer();
        for _ in 0..N {
            log_info!("Activating {:?}.", self.active_name());
            if self.registry[self.active].init() == Activation::Ready {
                return;
            }

            log_info!("{:?} asked to be skipped.", self.active_name());
            if self.registry[self.active].exit() == ExitDecision::Vetoed {
                log_warn!("{:?} asked to be skipped but refused to be left.", self.active_name());
                return;
            }
            self.active = self.registry.next_index(self.active);
        }
        log_warn!("Every application asked to be skipped, settling on {:?}.", self.active_name());
    }
}
