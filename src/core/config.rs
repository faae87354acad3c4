//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wander/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::Route;
use crate::core::state::Settings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WanderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
    pub catalog_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImagesConfig {
    pub enabled: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub thumbnail_width: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SettingsConfig {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 64;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: Route,
    /// `None` means the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    pub images_enabled: bool,
    pub image_timeout_secs: u64,
    pub thumbnail_width: u32,
    pub settings: Settings,
}

/// Values from CLI flags. `None`/`false` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub route: Option<Route>,
    pub catalog: Option<PathBuf>,
    pub no_images: bool,
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

/// Returns `~/.wander/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wander"))
}

/// Returns the path to `~/.wander/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.wander/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WanderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WanderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WanderConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WanderConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WanderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Wander Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "list"              # "list", "favorites", "settings" or "detail/<id>"
# catalog_file = "catalog.toml"     # Path relative to ~/.wander/, replaces the built-in items

# [images]
# enabled = true                    # Or set WANDER_NO_IMAGES to disable
# timeout_secs = 10
# thumbnail_width = 64

# [settings]
# dark_mode = false
# notifications = true
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
pub fn resolve(config: &WanderConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Start route: CLI → env → config → default
    let start_route = cli.route.unwrap_or_else(|| {
        std::env::var("WANDER_START_ROUTE")
            .ok()
            .or_else(|| config.general.start_route.clone())
            .and_then(|s| parse_route_or_warn(&s))
            .unwrap_or(Route::List)
    });

    // Catalog: CLI → env → config (relative to ~/.wander/) → seed
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| std::env::var("WANDER_CATALOG").ok().map(PathBuf::from))
        .or_else(|| {
            config.general.catalog_file.as_ref().map(|file| {
                config_dir()
                    .map(|dir| dir.join(file))
                    .unwrap_or_else(|| PathBuf::from(file))
            })
        });

    // Images: any disable wins
    let images_enabled = !cli.no_images
        && std::env::var_os("WANDER_NO_IMAGES").is_none()
        && config.images.enabled.unwrap_or(true);

    let defaults = Settings::default();
    ResolvedConfig {
        start_route,
        catalog_path,
        images_enabled,
        image_timeout_secs: config
            .images
            .timeout_secs
            .unwrap_or(DEFAULT_IMAGE_TIMEOUT_SECS),
        thumbnail_width: config
            .images
            .thumbnail_width
            .unwrap_or(DEFAULT_THUMBNAIL_WIDTH)
            .max(1),
        settings: Settings {
            dark_mode: config.settings.dark_mode.unwrap_or(defaults.dark_mode),
            notifications: config
                .settings
                .notifications
                .unwrap_or(defaults.notifications),
        },
    }
}

fn parse_route_or_warn(s: &str) -> Option<Route> {
    match s.parse() {
        Ok(route) => Some(route),
        Err(e) => {
            warn!("Ignoring start route: {}", e);
            None
        }
    }
}
