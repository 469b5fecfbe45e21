//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pausenknopf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PausenknopfConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub reduced_motion: Option<bool>,
    pub search_debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub reduced_motion: bool,
    pub search_debounce_ms: u64,
    /// Catalog file to load instead of the embedded one (None = embedded).
    pub catalog_path: Option<PathBuf>,
    /// Directory holding favorites and other persisted state.
    pub data_dir: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pausenknopf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pausenknopf").join("config.toml"))
}

/// Load config from `~/.pausenknopf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PausenknopfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PausenknopfConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PausenknopfConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PausenknopfConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PausenknopfConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Pausenknopf Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# reduced_motion = false       # true freezes the breathing animation
# search_debounce_ms = 300

# [catalog]
# path = "/path/to/catalog.json"   # Custom catalog instead of the built-in one

# [storage]
# data_dir = "/path/to/data"       # Where favorites are stored (default ~/.pausenknopf)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_catalog` is from the `--catalog` flag (None = not specified) and
/// `cli_reduced_motion` from `--reduced-motion`.
pub fn resolve(
    config: &PausenknopfConfig,
    cli_catalog: Option<&Path>,
    cli_reduced_motion: bool,
) -> ResolvedConfig {
    // Reduced motion: CLI → env → config → off
    let reduced_motion = cli_reduced_motion
        || env_flag("PAUSENKNOPF_REDUCED_MOTION")
        || config.general.reduced_motion.unwrap_or(false);

    // Debounce: env → config → default
    let search_debounce_ms = std::env::var("PAUSENKNOPF_DEBOUNCE_MS")
        .ok()
        .and_then(|v| match v.parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                warn!("Ignoring non-numeric PAUSENKNOPF_DEBOUNCE_MS: {v:?}");
                None
            }
        })
        .or(config.general.search_debounce_ms)
        .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

    // Catalog path: CLI → env → config → embedded
    let catalog_path = cli_catalog
        .map(|p| p.to_path_buf())
        .or_else(|| std::env::var("PAUSENKNOPF_CATALOG").ok().map(PathBuf::from))
        .or_else(|| config.catalog.path.clone().map(PathBuf::from));

    // Data dir: env → config → ~/.pausenknopf
    let data_dir = std::env::var("PAUSENKNOPF_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.storage.data_dir.clone().map(PathBuf::from))
        .unwrap_or_else(default_data_dir);

    ResolvedConfig {
        reduced_motion,
        search_debounce_ms,
        catalog_path,
        data_dir,
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn default_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".pausenknopf"),
        None => {
            warn!("Could not determine home directory, storing data in ./.pausenknopf");
            PathBuf::from(".pausenknopf")
        }
    }
}
