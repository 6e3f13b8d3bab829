//! Source download via yt-dlp.

use crate::ToolCommand;
use std::path::Path;

/// Prefer an mp4 video with m4a audio, otherwise whatever is best.
pub const DEFAULT_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best";

/// Container the downloaded streams are merged into.
pub const DEFAULT_MERGE_FORMAT: &str = "mp4";

/// Options for the download step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// yt-dlp format selection expression (`-f`).
    pub format: String,
    /// Container for merged output (`--merge-output-format`).
    pub merge_output_format: String,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            merge_output_format: DEFAULT_MERGE_FORMAT.to_string(),
        }
    }
}

/// Build the yt-dlp invocation that fetches `url` into `dest`.
pub fn download_command(
    downloader: &Path,
    url: &str,
    dest: &Path,
    options: &DownloadOptions,
) -> ToolCommand {
    let mut cmd = ToolCommand::new(downloader.to_path_buf());
    cmd.args(["-f", options.format.as_str()]);
    cmd.args(["--merge-output-format", options.merge_output_format.as_str()]);
    cmd.arg("-o").arg(dest.as_os_str());
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_download_arguments() {
        let cmd = download_command(
            Path::new("/usr/bin/yt-dlp"),
            "https://example.test/v",
            Path::new("/tmp/yt2gif_x/video.mp4"),
            &DownloadOptions::default(),
        );

        assert_eq!(
            cmd.get_args(),
            [
                "-f",
                "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best",
                "--merge-output-format",
                "mp4",
                "-o",
                "/tmp/yt2gif_x/video.mp4",
                "https://example.test/v",
            ]
        );
    }

    #[test]
    fn url_is_last_and_untouched() {
        let options = DownloadOptions {
            format: "best".into(),
            merge_output_format: "mkv".into(),
        };
        let url = "https://youtu.be/kX8hfK0PrHM?t=42&list=x";
        let cmd = download_command(Path::new("yt-dlp"), url, Path::new("v.mkv"), &options);

        assert_eq!(cmd.get_args().last().and_then(|a| a.to_str()), Some(url));
        assert!(cmd.display().starts_with("yt-dlp -f best --merge-output-format mkv"));
    }
}
