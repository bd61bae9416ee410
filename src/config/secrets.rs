//! API credential loading.

use super::loader::ConfigError;
use secrecy::SecretString;
use std::path::Path;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Load the dotenv file (if any) into the process environment, then read
/// [`API_KEY_VAR`].
///
/// An explicit `env_file` must load; without one, a `.env` in the working
/// directory is used when present.
pub fn load_api_key(env_file: Option<&Path>) -> Result<SecretString, ConfigError> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .map_err(|source| ConfigError::EnvFile { path: path.to_path_buf(), source })?;
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!("Loaded environment from {}", path.display());
            }
        }
    }

    api_key_from(std::env::var(API_KEY_VAR).ok())
}

/// Reject a missing or blank credential.
pub fn api_key_from(value: Option<String>) -> Result<SecretString, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => Err(ConfigError::MissingCredential(API_KEY_VAR)),
    }
}
