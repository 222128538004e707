use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use decode_core::config::RunConfig;

/// Work out the run configuration from the positional arguments.
///
/// With an artifact, the arguments are used as-is and `root` is never read.
/// Without one, the configuration is derived from `<root>/.options.cache`.
pub fn resolve_run_config(
    root: &Path,
    artifact: Option<PathBuf>,
    resolver: Option<PathBuf>,
) -> Result<RunConfig> {
    match artifact {
        Some(artifact) => Ok(RunConfig::from_args(artifact, resolver)),
        None => RunConfig::from_options_cache(root).with_context(|| {
            format!(
                "Failed to derive configuration from {} (pass <path to kboot.elf> explicitly instead)",
                root.display()
            )
        }),
    }
}
