//! Per-run scratch directory.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PREFIX: &str = "yt2gif_";
const VIDEO_FILE: &str = "video.mp4";
const PALETTE_FILE: &str = "palette.png";

/// Workspace for one conversion run.
///
/// Owns a uniquely named temporary directory holding the downloaded video and
/// the generated palette. The directory is removed recursively when the
/// workspace is dropped, on every exit path; deletion errors are ignored.
///
/// # Example
///
/// ```no_run
/// use yt2gif_av::Workspace;
///
/// let workspace = Workspace::new(None)?;
/// let video = workspace.video();
/// // ... download into `video`, build `workspace.palette()` ...
/// drop(workspace); // directory is gone
/// # Ok::<(), yt2gif_av::Error>(())
/// ```
#[derive(Debug)]
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create a new workspace inside `parent`, or the system temp directory.
    pub fn new(parent: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(PREFIX);

        let temp_dir = match parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(|e| Error::Workspace(format!("failed to create temp dir: {e}")))?;

        tracing::debug!("Created workspace {:?}", temp_dir.path());
        Ok(Self { temp_dir })
    }

    /// Path to the temp directory.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a temp file path with the given name.
    pub fn temp_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Where the downloaded source video is written.
    pub fn video(&self) -> PathBuf {
        self.temp_file(VIDEO_FILE)
    }

    /// Where the generated palette image is written.
    pub fn palette(&self) -> PathBuf {
        self.temp_file(PALETTE_FILE)
    }

    /// Remove the workspace now rather than at end of scope.
    pub fn cleanup(self) {
        let path = self.temp_dir.path().to_path_buf();
        if let Err(e) = self.temp_dir.close() {
            tracing::debug!("Ignoring workspace removal error for {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_paths_live_inside_workspace() {
        let ws = Workspace::new(None).unwrap();
        assert!(ws.video().starts_with(ws.temp_dir()));
        assert!(ws.palette().starts_with(ws.temp_dir()));
        assert_eq!(ws.video().file_name().unwrap(), "video.mp4");
        assert_eq!(ws.palette().file_name().unwrap(), "palette.png");
    }

    #[test]
    fn name_is_prefixed_and_unique() {
        let parent = tempfile::tempdir().unwrap();
        let a = Workspace::new(Some(parent.path())).unwrap();
        let b = Workspace::new(Some(parent.path())).unwrap();

        assert_ne!(a.temp_dir(), b.temp_dir());
        let name = a.temp_dir().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("yt2gif_"), "unexpected name {name}");
    }

    #[test]
    fn drop_removes_directory_with_contents() {
        let parent = tempfile::tempdir().unwrap();
        let ws = Workspace::new(Some(parent.path())).unwrap();
        let dir = ws.temp_dir().to_path_buf();
        std::fs::write(ws.video(), b"video").unwrap();
        std::fs::write(ws.palette(), b"palette").unwrap();

        drop(ws);
        assert!(!dir.exists());
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[test]
    fn cleanup_removes_directory() {
        let ws = Workspace::new(None).unwrap();
        let dir = ws.temp_dir().to_path_buf();
        ws.cleanup();
        assert!(!dir.exists());
    }

    #[test]
    fn missing_parent_is_an_error() {
        let result = Workspace::new(Some(Path::new("/nonexistent/yt2gif/parent")));
        assert!(matches!(result, Err(Error::Workspace(_))));
    }
}
