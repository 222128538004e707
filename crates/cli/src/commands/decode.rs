use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use decode_core::config::RunConfig;
use decode_core::services::backends::Addr2LineResolver;
use decode_core::services::{decode_trace, DecodeSummary, SymbolResolver};
use log::{info, warn};

/// Decode a trace from `input` to `output` using the addr2line backend.
pub fn decode_command<R: BufRead, W: Write>(
    config: &RunConfig,
    input: R,
    output: W,
) -> Result<DecodeSummary> {
    decode_with_resolver(config, &Addr2LineResolver, input, output)
}

/// Decode a trace with an arbitrary resolver.
pub fn decode_with_resolver<R: BufRead, W: Write>(
    config: &RunConfig,
    resolver: &dyn SymbolResolver,
    input: R,
    output: W,
) -> Result<DecodeSummary> {
    if !config.artifact.is_file() {
        warn!("artifact {} does not exist; frames will not resolve", config.artifact.display());
    }

    let summary = decode_trace(input, output, resolver, config).with_context(|| {
        format!(
            "Failed to decode trace against {} with {}",
            config.artifact.display(),
            config.resolver.display()
        )
    })?;

    info!(
        "{} lines, {} frames, {} resolved, {} unresolved",
        summary.lines, summary.addresses, summary.resolved, summary.unresolved
    );
    Ok(summary)
}
