//! Locates and loads `superinit-lint.toml`.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <path>`
//! 2. `superinit-lint.toml`, then `.superinit-lint.toml`, in the analyzed directory
//! 3. `config.toml` in `$SUPERINIT_LINT_CONFIG_DIR`, or `~/.superinit-lint/`
//! 4. built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use superinit_lint_core::Config;

/// Project-level config file names, checked in order.
const PROJECT_FILES: &[&str] = &["superinit-lint.toml", ".superinit-lint.toml"];

/// File looked up inside the global config directory.
const GLOBAL_FILE: &str = "config.toml";

/// Environment variable overriding the global config directory.
pub const CONFIG_DIR_ENV: &str = "SUPERINIT_LINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the analyzed sources.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the config file, or returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        tracing::info!("Using {}", self);
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "config {}", p.display()),
            Self::Project(p) => write!(f, "project config {}", p.display()),
            Self::Global(p) => write!(f, "global config {}", p.display()),
            Self::Default => f.write_str("default config"),
        }
    }
}

/// Resolves the config for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir().as_deref())
}

/// Same as [`resolve`] with the global directory passed in.
fn resolve_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_FILE)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Global config directory: `$SUPERINIT_LINT_CONFIG_DIR`, else
/// `~/.superinit-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".superinit-lint")))
}
