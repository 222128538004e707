//! Address extraction from free-form trace text.
//!
//! KBoot prints a backtrace as one frame per line, either ` 0xADDR` or, for
//! relocatable builds, ` 0xADDR (0xOFFSET)` where the parenthesized value is
//! the link-time address. Everything else in the capture (log noise, the
//! `Backtrace:` header) is skipped.

use std::io::{self, BufRead};

use log::trace;

use crate::model::AddressToken;

/// Prefix every backtrace frame line starts with.
pub const FRAME_PREFIX: &str = " 0x";

/// Extract the address from a single trace line, if it looks like a frame.
///
/// Never fails: anything that does not match one of the recognized shapes
/// yields `None`.
pub fn extract_address(line: &str) -> Option<AddressToken> {
    if !line.starts_with(FRAME_PREFIX) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let candidate = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(only), None, None) => only,
        (Some(_), Some(second), None) => second.strip_prefix('(')?.strip_suffix(')')?,
        _ => return None,
    };

    AddressToken::parse(candidate)
}

/// Lazy iterator over the frame addresses in a trace stream.
///
/// Yields `(line_number, address)` pairs in input order; line numbers are
/// 1-based. Read errors are yielded once and then the iterator stops.
pub struct TraceLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> TraceLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new(), line_no: 0, done: false }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceLines<R> {
    type Item = io::Result<(usize, AddressToken)>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_no += 1;
                    // Serial captures are not guaranteed to be valid UTF-8.
                    let line = String::from_utf8_lossy(&self.buf);
                    match extract_address(&line) {
                        Some(address) => return Some(Ok((self.line_no, address))),
                        None => trace!("skipping line {}: {:?}", self.line_no, line.trim_end()),
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Collect every frame address from `text`, in order.
pub fn extract_addresses(text: &str) -> Vec<AddressToken> {
    text.lines().filter_map(extract_address).collect()
}
