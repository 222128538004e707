use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Resolution, ResolutionRequest};

/// Errors that make further resolution pointless.
///
/// A per-address miss is not an error; it is reported as `Resolution::Unresolved`.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver program could not be started (missing, not executable, ...).
    #[error("failed to launch resolver {}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that can turn an address in an artifact into a symbol.
pub trait SymbolResolver {
    fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution, ResolveError>;
    fn name(&self) -> &str;
}
