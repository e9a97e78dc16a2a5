//! Application configuration for DocBridge.
//!
//! User config lives at `~/.docbridge/docbridge.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocBridgeError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docbridge.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docbridge";

// ---------------------------------------------------------------------------
// Config structs (matching docbridge.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Documentation source locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root directory of the core documentation corpus.
    #[serde(default = "default_core_root")]
    pub core_root: String,

    /// Root of the Lattice repository checkout (for the repo-docs corpus).
    #[serde(default = "default_repo_root")]
    pub repo_root: String,

    /// Path to the Admin API error catalog JSON.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            core_root: default_core_root(),
            repo_root: default_repo_root(),
            catalog_path: default_catalog_path(),
        }
    }
}

fn default_core_root() -> String {
    "docs".into()
}
fn default_repo_root() -> String {
    "../lattice".into()
}
fn default_catalog_path() -> String {
    "docs/admin-api-errors.json".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docbridge/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocBridgeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docbridge/docbridge.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocBridgeError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| DocBridgeError::parse(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocBridgeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocBridgeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocBridgeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
