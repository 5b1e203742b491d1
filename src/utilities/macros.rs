//! Convenience macros for the watch core.
#![macro_use]

/// Define and export a specific port module (transparently pulls
/// its namespace to the current one).
///
/// Used mostly to conveniently fit the module declaration and reexport
/// under a single configuration flag.
///
/// # Example
/// ```ignore
/// #[cfg(target_arch = "arm")]
/// port!(semihosted: [watch,]);
/// // Expands into:
/// pub mod semihosted { pub mod watch; }
/// pub use self::semihosted::watch;
/// ```
#[macro_export]
macro_rules! port {
    ($mod:ident) => {
        pub mod $mod;
        pub use self::$mod::*;
    };
    ($outer:ident: [$($inner:ident,)+]) => {
        pub mod $outer {
        $(
            pub mod $inner;
        )+
        }
        $(
            pub use self::$outer::$inner;
        )+
    };
}

/// Logs through `defmt` on target. Host builds have no global `defmt`
/// logger to link against, so arguments are only borrowed there.
#[macro_export]
macro_rules! log_info {
    ($format:literal $(, $argument:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::info!($format $(, $argument)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = ($(&$argument,)*);
    }};
}

/// Warning level counterpart of [`log_info`].
#[macro_export]
macro_rules! log_warn {
    ($format:literal $(, $argument:expr)* $(,)?) => {{
        #[cfg(target_arch = "arm")]
        defmt::warn!($format $(, $argument)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = ($(&$argument,)*);
    }};
}
