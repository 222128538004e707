use std::path::{Path, PathBuf};

/// File name of the loader image produced by the build.
pub const ARTIFACT_NAME: &str = "kboot.elf";

/// Name of the cached build configuration written at the source root.
pub const OPTIONS_CACHE_NAME: &str = ".options.cache";

/// Logical layout of a source tree and one of its build variants.
///
/// This is derived from a root path and a variant name. It does *not* perform
/// any IO itself.
#[derive(Debug, Clone)]
pub struct BuildLayout {
    /// Root of the source tree (where `.options.cache` lives).
    pub root: PathBuf,
    /// Path to the cached build configuration.
    pub options_cache_path: PathBuf,
    /// `build/<variant>` directory.
    pub variant_dir: PathBuf,
    /// `build/<variant>/source/kboot.elf`.
    pub artifact_path: PathBuf,
}

impl BuildLayout {
    /// Compute the layout for `variant` under `root`.
    pub fn new(root: impl AsRef<Path>, variant: &str) -> Self {
        let root = root.as_ref().to_path_buf();
        let options_cache_path = Self::options_cache_path(&root);
        let variant_dir = root.join("build").join(variant);
        let artifact_path = variant_dir.join("source").join(ARTIFACT_NAME);

        Self { root, options_cache_path, variant_dir, artifact_path }
    }

    /// Location of the options cache for a source root, before the variant is known.
    pub fn options_cache_path(root: &Path) -> PathBuf {
        root.join(OPTIONS_CACHE_NAME)
    }
}
