#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Blocking Morse code transmitter library for embedded systems.
//! Maps characters to dot/dash patterns and keys them on a digital
//! output pin with the standard 1:3:1:3:7 timing ratios.

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod hal;
pub mod table;
pub mod transmitter;
pub mod types;


pub use table::{pattern, resolve_index, resolve_index_in};
pub use transmitter::*;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: Latin-only lookup, tracing off.
pub fn default_config() -> MorseConfig {
    MorseConfig {
        cyrillic_fallback: false,
        trace: false,
    }
}
