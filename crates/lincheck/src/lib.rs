//! Checker for candidate solutions of small linear equation systems.
//!
//! A [`LinearSystem`] holds an N×N coefficient matrix and a right-hand-side vector. It can be
//! populated from any [`RealSource`], rendered as readable equations, and asked whether a
//! candidate vector satisfies every equation within a fixed absolute tolerance. The system never
//! *solves* anything; it only verifies candidates supplied by the caller.
//!
//! [`LinearSystem`]: system::LinearSystem
//! [`RealSource`]: input::RealSource

use log::LevelFilter;

pub mod input;
pub mod system;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and lincheck will log at *debug* level; `RUST_LOG` overrides apply on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
