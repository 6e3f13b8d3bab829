//! # yt2gif-av
//!
//! External tool layer for yt2gif.
//!
//! This crate provides:
//! - **Tool resolution** ([`ToolLocator`]) -- find `yt-dlp` and `ffmpeg` on the
//!   search path or at configured override locations.
//! - **Command execution** ([`ToolCommand`]) -- async child-process runner that
//!   shares stdout/stderr with the caller and honours a cancellation token.
//! - **Workspace management** ([`Workspace`]) -- a per-run temporary directory
//!   that is removed on drop.
//! - **Actions** ([`actions`]) -- the download, palette generation, and
//!   palette-based encode steps.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use tokio_util::sync::CancellationToken;
//! use yt2gif_av::actions::{
//!     download_command, encode_command, palette_command, ClipWindow, DownloadOptions, GifSettings,
//! };
//! use yt2gif_av::{ToolLocator, Workspace};
//!
//! # async fn example() -> yt2gif_av::Result<()> {
//! let tools = ToolLocator::new().resolve_all()?;
//! let workspace = Workspace::new(None)?;
//! let cancel = CancellationToken::new();
//! let window = ClipWindow::new("10", "5");
//! let settings = GifSettings::default();
//!
//! let url = "https://youtu.be/kX8hfK0PrHM";
//! download_command(&tools.downloader, url, &workspace.video(), &DownloadOptions::default())
//!     .execute(&cancel)
//!     .await?;
//! palette_command(&tools.transcoder, &workspace.video(), &workspace.palette(), &window, &settings)
//!     .execute(&cancel)
//!     .await?;
//! encode_command(
//!     &tools.transcoder,
//!     &workspace.video(),
//!     &workspace.palette(),
//!     Path::new("clip.gif"),
//!     &window,
//!     &settings,
//! )
//! .execute(&cancel)
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod command;
mod error;
pub mod template;
pub mod tools;
pub mod workspace;

// Re-exports
pub use command::ToolCommand;
pub use error::{Error, Result};
pub use template::TemplateContext;
pub use tools::{check_tool, Tool, ToolInfo, ToolLocator, ToolPaths};
pub use workspace::Workspace;
