use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use yt2gif_av::actions::{DownloadOptions, GifSettings};
use yt2gif_av::{Tool, ToolLocator};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub gif: GifConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Print each tool command line before running it
    #[serde(default = "default_echo_commands")]
    pub echo_commands: bool,
}

fn default_echo_commands() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools: ToolsConfig::default(),
            download: DownloadConfig::default(),
            gif: GifConfig::default(),
            workspace: WorkspaceConfig::default(),
            echo_commands: default_echo_commands(),
        }
    }
}

/// Explicit tool locations. Used only when the path exists; otherwise the
/// tool is looked up on `PATH`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub downloader_path: Option<PathBuf>,

    #[serde(default)]
    pub transcoder_path: Option<PathBuf>,
}

impl ToolsConfig {
    pub fn locator(&self) -> ToolLocator {
        ToolLocator::new()
            .with_override(Tool::Downloader, self.downloader_path.clone())
            .with_override(Tool::Transcoder, self.transcoder_path.clone())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    /// yt-dlp format selector
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_merge_output_format")]
    pub merge_output_format: String,
}

fn default_format() -> String {
    yt2gif_av::actions::DEFAULT_FORMAT.to_string()
}

fn default_merge_output_format() -> String {
    yt2gif_av::actions::DEFAULT_MERGE_FORMAT.to_string()
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            merge_output_format: default_merge_output_format(),
        }
    }
}

impl From<&DownloadConfig> for DownloadOptions {
    fn from(config: &DownloadConfig) -> Self {
        Self {
            format: config.format.clone(),
            merge_output_format: config.merge_output_format.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GifConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Output width in pixels (height keeps the aspect ratio)
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_scale_flags")]
    pub scale_flags: String,
}

fn default_fps() -> u32 {
    10
}
fn default_width() -> u32 {
    320
}
fn default_scale_flags() -> String {
    "lanczos".to_string()
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            width: default_width(),
            scale_flags: default_scale_flags(),
        }
    }
}

impl From<&GifConfig> for GifSettings {
    fn from(config: &GifConfig) -> Self {
        Self {
            fps: config.fps,
            width: config.width,
            scale_flags: config.scale_flags.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Directory in which per-run workspaces are created (default: system temp dir)
    #[serde(default)]
    pub parent: Option<PathBuf>,
}
