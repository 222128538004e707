//! Run configuration: which artifact to symbolize against and which resolver to run.
//!
//! There are two ways to get one:
//! - `RunConfig::from_args`: explicit artifact path and optional resolver.
//! - `RunConfig::from_options_cache`: derived from the build system's
//!   `.options.cache` and the `build/<variant>/source/kboot.elf` convention.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

pub mod cache;
pub mod layout;

pub use cache::{OptionsCache, PREFIX_KEY, VARIANT_KEY};
pub use layout::{BuildLayout, ARTIFACT_NAME, OPTIONS_CACHE_NAME};

use crate::services::backends::DEFAULT_RESOLVER;

/// Error type for deriving a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read build configuration cache {}", path.display())]
    CacheUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{key} is not defined in {}", path.display())]
    MissingValue { key: &'static str, path: PathBuf },

    #[error("CONFIG is empty in {}", path.display())]
    EmptyVariant { path: PathBuf },
}

/// Artifact and resolver program for one decoding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Binary with debug info that addresses are resolved against.
    pub artifact: PathBuf,
    /// addr2line-compatible program; a bare name is looked up on `PATH`.
    pub resolver: PathBuf,
}

impl RunConfig {
    /// Build a configuration from explicit arguments. Touches no files.
    pub fn from_args(artifact: impl Into<PathBuf>, resolver: Option<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            resolver: resolver.unwrap_or_else(|| PathBuf::from(DEFAULT_RESOLVER)),
        }
    }

    /// Derive a configuration from `<root>/.options.cache`.
    pub fn from_options_cache(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let path = BuildLayout::options_cache_path(root);
        let text = fs::read_to_string(&path)
            .map_err(|source| ConfigError::CacheUnreadable { path: path.clone(), source })?;
        let cache = OptionsCache::parse(&text);

        let variant = cache
            .variant()
            .ok_or_else(|| ConfigError::MissingValue { key: VARIANT_KEY, path: path.clone() })?;
        if variant.is_empty() {
            return Err(ConfigError::EmptyVariant { path });
        }
        let prefix = cache
            .cross_compile()
            .ok_or_else(|| ConfigError::MissingValue { key: PREFIX_KEY, path: path.clone() })?;

        let layout = BuildLayout::new(root, variant);
        let config = Self {
            artifact: layout.artifact_path,
            resolver: PathBuf::from(format!("{prefix}{DEFAULT_RESOLVER}")),
        };
        info!(
            "using variant {variant}: artifact {}, resolver {}",
            config.artifact.display(),
            config.resolver.display()
        );
        Ok(config)
    }
}
