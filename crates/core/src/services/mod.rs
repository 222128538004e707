//! Resolution and decoding services.
//!
//! `resolver` defines the seam between text processing and symbolization;
//! `backends` holds the concrete resolvers; `decode` drives the pipeline.

pub mod backends;
pub mod decode;
pub mod resolver;

pub use decode::{decode_trace, format_entry, DecodeError, DecodeSummary};
pub use resolver::{ResolveError, SymbolResolver};
