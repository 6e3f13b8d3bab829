mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./yt2gif.toml",
        "~/.config/yt2gif/config.toml",
        "/etc/yt2gif/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.gif.fps == 0 {
        anyhow::bail!("gif.fps must be greater than 0");
    }

    if config.gif.width == 0 {
        anyhow::bail!("gif.width must be greater than 0");
    }

    if config.gif.scale_flags.trim().is_empty() {
        anyhow::bail!("gif.scale_flags cannot be empty");
    }

    if config.download.format.trim().is_empty() {
        anyhow::bail!("download.format cannot be empty");
    }

    if config.download.merge_output_format.trim().is_empty() {
        anyhow::bail!("download.merge_output_format cannot be empty");
    }

    if let Some(parent) = &config.workspace.parent {
        if !parent.is_dir() {
            tracing::warn!("Workspace parent does not exist: {:?}", parent);
        }
    }

    Ok(())
}
