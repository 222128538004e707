use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::config::RunConfig;
use crate::extract::TraceLines;
use crate::model::{DecodedEntry, Resolution, ResolutionRequest};
use crate::services::resolver::{ResolveError, SymbolResolver};

/// Fatal errors while decoding a trace.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read trace input")]
    Read(#[source] io::Error),
    #[error("failed to write decoded trace")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Counters for a finished decode run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Input lines consumed.
    pub lines: usize,
    /// Frame addresses recognized.
    pub addresses: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

/// Render one decoded frame as `<address> - <function> @ <location>`.
pub fn format_entry(entry: &DecodedEntry) -> String {
    format!("{} - {} @ {}", entry.address, entry.symbol.function, entry.symbol.location)
}

/// Decode every frame in `input`, writing one line per resolved address to `output`.
///
/// Frames are processed strictly in order, one resolver call each. Addresses
/// the resolver cannot place are left out; only launch failures and I/O
/// errors abort the run.
pub fn decode_trace<R, W>(
    input: R,
    mut output: W,
    resolver: &dyn SymbolResolver,
    config: &RunConfig,
) -> Result<DecodeSummary, DecodeError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = DecodeSummary::default();
    let mut lines = TraceLines::new(input);

    for item in lines.by_ref() {
        let (line_no, address) = item.map_err(DecodeError::Read)?;
        summary.addresses += 1;

        let request = ResolutionRequest {
            artifact: config.artifact.clone(),
            resolver: config.resolver.clone(),
            address,
        };
        match resolver.resolve(&request)? {
            Resolution::Resolved(symbol) => {
                summary.resolved += 1;
                let entry = DecodedEntry { address: request.address, symbol };
                writeln!(output, "{}", format_entry(&entry)).map_err(DecodeError::Write)?;
            }
            Resolution::Unresolved => {
                summary.unresolved += 1;
                debug!("line {line_no}: {} did not resolve via {}", request.address, resolver.name());
            }
        }
    }

    output.flush().map_err(DecodeError::Write)?;
    summary.lines = lines.lines_read();
    Ok(summary)
}
