//! Command builders for the three conversion steps.
//!
//! Each builder returns a [`ToolCommand`](crate::ToolCommand) so the caller
//! can report the exact command line before executing it.

mod download;
mod gif;

pub use download::{download_command, DownloadOptions, DEFAULT_FORMAT, DEFAULT_MERGE_FORMAT};
pub use gif::{encode_command, palette_command, ClipWindow, GifSettings};
