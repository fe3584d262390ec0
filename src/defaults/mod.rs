use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Data file validated when no path is given, relative to the executable's directory.
pub const DEFAULT_DATA_PATH: &str = "../data/stoptimes.json";

/// Join [`DEFAULT_DATA_PATH`] onto `base_dir`.
pub fn default_target(base_dir: &Path) -> PathBuf {
    base_dir.join(DEFAULT_DATA_PATH)
}

/// Directory containing the running executable, used as the base for the default target.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable path has no parent: {}", exe.display()))
}
