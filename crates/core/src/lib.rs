//! decode-core
//!
//! Core library for turning an address-only KBoot backtrace into a readable
//! trace with function names and source locations.
//!
//! The pipeline is a single forward pass:
//! - `config`: work out the artifact and resolver program for the run.
//! - `extract`: pull one frame address (at most) out of each trace line.
//! - `services`: resolve each address through a `SymbolResolver` and format
//!   the ones that resolve.
//!
//! The CLI is a thin wrapper; everything testable lives here.

pub mod config;
pub mod extract;
pub mod model;
pub mod services;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
