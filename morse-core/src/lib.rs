#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # Morse Core
//!
//! Blocking Morse code transmission engine for unattended, power-constrained
//! beacons. Encodes text to bit-packed symbols, derives every pulse and gap
//! from a single words-per-minute rate, and keys one output line with an
//! optional "short fist" duty reduction.

pub mod types;
pub mod symbols;
pub mod encoder;
pub mod timing;
pub mod transmitter;
pub mod beacon;
pub mod hal;

#[cfg(feature = "test-utils")]
pub mod test_utils;


pub use types::*;
pub use encoder::classify;
pub use timing::{Interval, Plan, Timing};
pub use transmitter::*;
pub use beacon::*;
pub use hal::{Duration, HalError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: slow speed, no short fist, active-high line
pub fn default_config() -> TransmitterConfig {
    TransmitterConfig::default()
}
