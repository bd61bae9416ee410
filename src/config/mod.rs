//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults), plus the API
//! credential read from a dotenv file.

pub mod loader;
pub mod merge;
pub mod secrets;

pub use loader::{load_config, resolve_repo_root, ConfigError};
pub use merge::CliOverrides;
pub use secrets::load_api_key;
