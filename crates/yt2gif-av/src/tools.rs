//! External tool detection.
//!
//! The [`ToolLocator`] resolves the two executables the conversion depends on
//! (`yt-dlp` and `ffmpeg`), preferring configured override paths and falling
//! back to a search of `PATH`.

use crate::{Error, Result};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An external tool required by the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// The video downloader (`yt-dlp`).
    Downloader,
    /// The media transcoder (`ffmpeg`).
    Transcoder,
}

impl Tool {
    /// All tools, in resolution order.
    pub const ALL: [Tool; 2] = [Tool::Downloader, Tool::Transcoder];

    /// Executable name looked up on the search path.
    pub fn program(&self) -> &'static str {
        match self {
            Tool::Downloader => "yt-dlp",
            Tool::Transcoder => "ffmpeg",
        }
    }

    /// Suggested command for installing the tool.
    pub fn install_hint(&self) -> String {
        format!("sudo apt install {}", self.program())
    }

    fn version_arg(&self) -> &'static str {
        match self {
            Tool::Downloader => "--version",
            Tool::Transcoder => "-version",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Resolved locations of both required executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub downloader: PathBuf,
    pub transcoder: PathBuf,
}

/// Resolves tools by override path or by name on a search path.
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    search_path: Option<OsString>,
    downloader_override: Option<PathBuf>,
    transcoder_override: Option<PathBuf>,
}

impl ToolLocator {
    /// A locator that searches the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the given `PATH`-style list instead of the process environment.
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Prefer `path` for `tool` when it exists.
    pub fn with_override(mut self, tool: Tool, path: Option<PathBuf>) -> Self {
        match tool {
            Tool::Downloader => self.downloader_override = path,
            Tool::Transcoder => self.transcoder_override = path,
        }
        self
    }

    fn override_for(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::Downloader => self.downloader_override.as_deref(),
            Tool::Transcoder => self.transcoder_override.as_deref(),
        }
    }

    /// Look up a single tool, at its override location or on the search path.
    pub fn find(&self, tool: Tool) -> Option<PathBuf> {
        if let Some(path) = self.override_for(tool) {
            if path.exists() {
                tracing::debug!("Using configured {} at {:?}", tool, path);
                return Some(path.to_path_buf());
            }
            tracing::warn!(
                "Configured path for {} does not exist: {:?}; searching PATH",
                tool,
                path
            );
        }

        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(tool.program(), Some(paths), cwd)
            }
            None => which::which(tool.program()),
        };

        found.ok()
    }

    /// Resolve a single tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] if the tool is neither at its override
    /// location nor on the search path.
    pub fn resolve(&self, tool: Tool) -> Result<PathBuf> {
        self.find(tool).ok_or_else(|| Error::tool_not_found(tool))
    }

    /// Resolve the downloader, then the transcoder.
    ///
    /// Stops at the first missing tool, so a missing downloader is reported
    /// even when the transcoder is also absent.
    pub fn resolve_all(&self) -> Result<ToolPaths> {
        let downloader = self.resolve(Tool::Downloader)?;
        let transcoder = self.resolve(Tool::Transcoder)?;
        Ok(ToolPaths {
            downloader,
            transcoder,
        })
    }
}

/// Availability information for a tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// The tool.
    pub tool: Tool,
    /// Whether the tool was found.
    pub available: bool,
    /// First line of the tool's version output, if it could be read.
    pub version: Option<String>,
    /// Resolved path to the executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its version line.
pub fn check_tool(locator: &ToolLocator, tool: Tool) -> ToolInfo {
    let Ok(path) = locator.resolve(tool) else {
        return ToolInfo {
            tool,
            available: false,
            version: None,
            path: None,
        };
    };

    let version = Command::new(&path)
        .arg(tool.version_arg())
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string())
        });

    ToolInfo {
        tool,
        available: true,
        version,
        path: Some(path),
    }
}
