use std::process::{Command, Stdio};

use log::debug;

use crate::model::{Resolution, ResolutionRequest, Symbol};
use crate::services::resolver::{ResolveError, SymbolResolver};

/// Resolver program name used when none is configured; looked up on `PATH`.
pub const DEFAULT_RESOLVER: &str = "addr2line";

/// Resolver that shells out to an addr2line-compatible program, once per address.
///
/// The program named by `ResolutionRequest::resolver` is run as
/// `<resolver> -f -e <artifact> <address>` and is expected to print the
/// function name on the first line and `file:line` on the second.
#[derive(Debug, Default, Clone, Copy)]
pub struct Addr2LineResolver;

impl SymbolResolver for Addr2LineResolver {
    fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution, ResolveError> {
        let output = Command::new(&request.resolver)
            .args(["-f", "-e"])
            .arg(&request.artifact)
            .arg(request.address.as_str())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ResolveError::Launch { program: request.resolver.clone(), source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                "{} unresolved ({}): {}",
                request.address,
                output.status,
                stderr.lines().next().unwrap_or("").trim()
            );
            return Ok(Resolution::Unresolved);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_output(&stdout) {
            Some(symbol) => Ok(Resolution::Resolved(symbol)),
            None => {
                debug!("{} unresolved: short resolver output {:?}", request.address, stdout);
                Ok(Resolution::Unresolved)
            }
        }
    }

    fn name(&self) -> &str {
        DEFAULT_RESOLVER
    }
}

/// Split resolver output into function name and location.
///
/// Lines are passed through untouched (including `??` placeholders); only the
/// first two `\n`-separated lines are used.
pub fn parse_output(stdout: &str) -> Option<Symbol> {
    let mut lines = stdout.split('\n');
    let function = lines.next()?;
    let location = lines.next()?;
    Some(Symbol::new(function, location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_takes_first_two_lines() {
        let symbol = parse_output("foo\nfile.c:42\n").unwrap();
        assert_eq!(symbol, Symbol::new("foo", "file.c:42"));
    }

    #[test]
    fn parse_output_passes_placeholders_through() {
        let symbol = parse_output("??\n??:0\n").unwrap();
        assert_eq!(symbol.function, "??");
        assert_eq!(symbol.location, "??:0");
    }

    #[test]
    fn parse_output_rejects_single_line() {
        assert!(parse_output("").is_none());
        assert!(parse_output("foo").is_none());
    }
}
