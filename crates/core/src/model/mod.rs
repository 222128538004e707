//! Core data model for decoding a backtrace.
//!
//! Everything here is transient: a trace line becomes at most one
//! `AddressToken`, each token becomes one `ResolutionRequest`, and a
//! successful lookup becomes a `DecodedEntry` that is written out and dropped.

use std::fmt;
use std::path::PathBuf;

/// A hexadecimal address literal (`0x...`) pulled out of a trace line.
///
/// The original spelling is preserved so the decoded output echoes exactly
/// what the loader printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressToken(String);

impl AddressToken {
    /// Validate `text` as a hex literal. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One lookup to perform: which artifact, which resolver program, which address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub artifact: PathBuf,
    pub resolver: PathBuf,
    pub address: AddressToken,
}

/// Function name and source location as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub function: String,
    pub location: String,
}

impl Symbol {
    pub fn new(function: impl Into<String>, location: impl Into<String>) -> Self {
        Self { function: function.into(), location: location.into() }
    }
}

/// Outcome of resolving a single address.
///
/// `Unresolved` is an expected result (firmware addresses, wild jumps), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Symbol),
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_symbol(self) -> Option<Symbol> {
        match self {
            Resolution::Resolved(symbol) => Some(symbol),
            Resolution::Unresolved => None,
        }
    }
}

/// A resolved address ready to be formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntry {
    pub address: AddressToken,
    pub symbol: Symbol,
}
