//! Config file loading

use super::merge::CliOverrides;
use crate::domain::Config;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `GIT_CHAT_MODEL`.
pub const ENV_PREFIX: &str = "GIT_CHAT_";

const CONFIG_CANDIDATES: [&str; 2] = ["git-chat.toml", ".git-chat.toml"];

/// Startup configuration problems. All of these are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("failed to load environment file {path}: {source}")]
    EnvFile { path: PathBuf, source: dotenvy::Error },

    #[error("{0} is not set; add it to the environment or the configured env file")]
    MissingCredential(&'static str),

    #[error("repository root {path} is not usable: {reason}")]
    RepositoryRoot { path: PathBuf, reason: String },
}

/// Merge defaults < config file < `GIT_CHAT_*` environment < CLI flags.
///
/// An explicit `config_path` must exist; otherwise `git-chat.toml` or
/// `.git-chat.toml` in `search_dir` is used when present.
pub fn load_config(
    search_dir: &Path,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Config, ConfigError> {
    let file = match config_path {
        Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
    if let Some(file) = &file {
        tracing::debug!("Loading config file {}", file.display());
        figment = figment.merge(Toml::file(file));
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX)).merge(Serialized::defaults(overrides));

    figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Canonicalize the repository root and check that it is a directory.
pub fn resolve_repo_root(path: &Path) -> Result<PathBuf, ConfigError> {
    let canonical = path.canonicalize().map_err(|e| ConfigError::RepositoryRoot {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !canonical.is_dir() {
        return Err(ConfigError::RepositoryRoot {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    Ok(canonical)
}
