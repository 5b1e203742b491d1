//! Build time configuration.
//!
//! Generated by the build script from the `.ron` file named by the
//! `WATCHCORE_CONFIG` environment variable, or from the sample
//! configuration when it is unset.
include!(concat!(env!("OUT_DIR"), "/configuration.rs"));

static_assertions::const_assert!(IDLE_TIMEOUT_MINUTES > 0);
static_assertions::const_assert_eq!(CLICKER_CHANNEL.len(), 2);
