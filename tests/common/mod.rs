//! Shared test harness for integration tests.
//!
//! Provides [`FakeTools`], a directory of stand-in `yt-dlp` and `ffmpeg`
//! shell scripts that log every invocation and write placeholder output
//! files. The scripts use shell builtins only, so the directory can serve as
//! the whole `PATH`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use yt2gif_av::ToolLocator;

/// How the fake `ffmpeg` behaves.
#[derive(Debug, Clone, Copy)]
pub enum Transcoder {
    /// Both passes succeed.
    Ok,
    /// The palette pass exits with this code.
    PaletteFails(i32),
    /// The encode pass exits with this code.
    EncodeFails(i32),
    /// Spin until killed.
    Hang,
}

pub struct FakeTools {
    dir: TempDir,
    log: PathBuf,
}

impl FakeTools {
    /// An empty bin directory.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("failed to create fake bin dir");
        let log = dir.path().join("invocations.log");
        Self { dir, log }
    }

    /// Both tools present and succeeding.
    pub fn working() -> Self {
        Self::empty().with_downloader(0).with_transcoder(Transcoder::Ok)
    }

    /// Install a `yt-dlp` that writes its `-o` target and exits with `code`.
    pub fn with_downloader(self, code: i32) -> Self {
        let script = format!(
            r#"#!/bin/sh
echo "yt-dlp $*" >> "{log}"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
done
if [ {code} -ne 0 ]; then exit {code}; fi
echo "video" > "$out"
"#,
            log = self.log.display(),
            code = code,
        );
        self.install("yt-dlp", &script);
        self
    }

    /// Install an `ffmpeg` that writes its last argument.
    pub fn with_transcoder(self, behavior: Transcoder) -> Self {
        let (palette_code, encode_code) = match behavior {
            Transcoder::Ok | Transcoder::Hang => (0, 0),
            Transcoder::PaletteFails(code) => (code, 0),
            Transcoder::EncodeFails(code) => (0, code),
        };
        let hang = if matches!(behavior, Transcoder::Hang) {
            "while :; do :; done\n"
        } else {
            ""
        };
        let script = format!(
            r#"#!/bin/sh
echo "ffmpeg $*" >> "{log}"
{hang}last=""
pass=palette
for a in "$@"; do
  last="$a"
  case "$a" in *paletteuse*) pass=encode ;; esac
done
if [ "$pass" = palette ]; then code={palette_code}; else code={encode_code}; fi
if [ "$code" -ne 0 ]; then exit "$code"; fi
echo "$pass output" > "$last"
"#,
            log = self.log.display(),
        );
        self.install("ffmpeg", &script);
        self
    }

    fn install(&self, name: &str, script: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, script).expect("failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to make fake tool executable");
    }

    /// Directory to use as `PATH`.
    pub fn bin_dir(&self) -> &Path {
        self.dir.path()
    }

    /// A locator that searches only the fake bin directory.
    pub fn locator(&self) -> ToolLocator {
        ToolLocator::new().with_search_path(self.dir.path())
    }

    /// Logged invocations, one line per tool run.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Invocations of one tool.
    pub fn invocations_of(&self, program: &str) -> Vec<String> {
        let prefix = format!("{} ", program);
        self.invocations()
            .into_iter()
            .filter(|line| line.starts_with(&prefix))
            .collect()
    }
}

/// Whether `dir` has no entries.
pub fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

/// Write a config file that keeps workspaces inside `parent`.
pub fn write_config(dir: &Path, parent: &Path) -> PathBuf {
    let path = dir.join("yt2gif.toml");
    fs::write(
        &path,
        format!("[workspace]\nparent = \"{}\"\n", parent.display()),
    )
    .expect("failed to write config");
    path
}
