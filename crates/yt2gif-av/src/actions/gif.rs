//! Two-pass palette GIF encoding via ffmpeg.
//!
//! The first pass (`palettegen`) computes an optimised 256-colour palette from
//! the trimmed clip; the second pass (`paletteuse`) maps every frame of the
//! same trimmed clip onto that palette. Both passes are built from one
//! [`ClipWindow`] and one [`GifSettings`], so they always see identical input.

use crate::ToolCommand;
use std::path::Path;

/// Time window of the clip, passed to ffmpeg as `-ss <start> -t <duration>`.
///
/// Values are opaque ffmpeg time specifications (`10`, `1:05`, `00:00:07.5`);
/// a malformed value is reported by ffmpeg itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipWindow {
    pub start: String,
    pub duration: String,
}

impl ClipWindow {
    pub fn new(start: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            duration: duration.into(),
        }
    }

    /// Seek/trim arguments placed before the primary `-i`.
    pub fn seek_args(&self) -> [&str; 4] {
        ["-ss", self.start.as_str(), "-t", self.duration.as_str()]
    }
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self::new("0", "5")
    }
}

/// Frame rate and scaling shared by both passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifSettings {
    /// Output frames per second.
    pub fps: u32,
    /// Output width in pixels; height follows the aspect ratio.
    pub width: u32,
    /// swscale resampling flags.
    pub scale_flags: String,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self {
            fps: 10,
            width: 320,
            scale_flags: "lanczos".to_string(),
        }
    }
}

impl GifSettings {
    /// The `fps,scale` filter chain applied in both passes.
    pub fn filter(&self) -> String {
        format!(
            "fps={},scale={}:-1:flags={}",
            self.fps, self.width, self.scale_flags
        )
    }

    /// Filter for the palette pass.
    pub fn palette_filter(&self) -> String {
        format!("{},palettegen", self.filter())
    }

    /// Filter graph for the encode pass; input 1 is the palette.
    pub fn encode_filter(&self) -> String {
        format!("{}[x];[x][1:v]paletteuse", self.filter())
    }
}

fn trimmed_input(transcoder: &Path, video: &Path, window: &ClipWindow) -> ToolCommand {
    let mut cmd = ToolCommand::new(transcoder.to_path_buf());
    cmd.args(["-v", "warning"]);
    cmd.args(window.seek_args());
    cmd.arg("-i").arg(video.as_os_str());
    cmd
}

/// Build the ffmpeg invocation that writes the clip's palette to `palette`.
pub fn palette_command(
    transcoder: &Path,
    video: &Path,
    palette: &Path,
    window: &ClipWindow,
    settings: &GifSettings,
) -> ToolCommand {
    let mut cmd = trimmed_input(transcoder, video, window);
    cmd.arg("-vf").arg(settings.palette_filter());
    cmd.arg("-y").arg(palette.as_os_str());
    cmd
}

/// Build the ffmpeg invocation that encodes the clip to `output` using
/// `palette`. An existing file at `output` is overwritten.
pub fn encode_command(
    transcoder: &Path,
    video: &Path,
    palette: &Path,
    output: &Path,
    window: &ClipWindow,
    settings: &GifSettings,
) -> ToolCommand {
    let mut cmd = trimmed_input(transcoder, video, window);
    cmd.arg("-i").arg(palette.as_os_str());
    cmd.arg("-filter_complex").arg(settings.encode_filter());
    cmd.arg("-y").arg(output.as_os_str());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    const FFMPEG: &str = "/usr/bin/ffmpeg";
    const VIDEO: &str = "/tmp/yt2gif_x/video.mp4";
    const PALETTE: &str = "/tmp/yt2gif_x/palette.png";

    #[test]
    fn default_filters() {
        let settings = GifSettings::default();
        assert_eq!(settings.filter(), "fps=10,scale=320:-1:flags=lanczos");
        assert_eq!(
            settings.palette_filter(),
            "fps=10,scale=320:-1:flags=lanczos,palettegen"
        );
        assert_eq!(
            settings.encode_filter(),
            "fps=10,scale=320:-1:flags=lanczos[x];[x][1:v]paletteuse"
        );
    }

    #[test]
    fn palette_arguments() {
        let cmd = palette_command(
            Path::new(FFMPEG),
            Path::new(VIDEO),
            Path::new(PALETTE),
            &ClipWindow::new("10", "5"),
            &GifSettings::default(),
        );

        assert_eq!(
            cmd.get_args(),
            [
                "-v",
                "warning",
                "-ss",
                "10",
                "-t",
                "5",
                "-i",
                VIDEO,
                "-vf",
                "fps=10,scale=320:-1:flags=lanczos,palettegen",
                "-y",
                PALETTE,
            ]
        );
    }

    #[test]
    fn encode_arguments() {
        let cmd = encode_command(
            Path::new(FFMPEG),
            Path::new(VIDEO),
            Path::new(PALETTE),
            Path::new("clip.gif"),
            &ClipWindow::new("10", "5"),
            &GifSettings::default(),
        );

        assert_eq!(
            cmd.get_args(),
            [
                "-v",
                "warning",
                "-ss",
                "10",
                "-t",
                "5",
                "-i",
                VIDEO,
                "-i",
                PALETTE,
                "-filter_complex",
                "fps=10,scale=320:-1:flags=lanczos[x];[x][1:v]paletteuse",
                "-y",
                "clip.gif",
            ]
        );
    }

    #[test]
    fn both_passes_share_the_window_verbatim() {
        let windows = [
            ("0", "5"),
            ("1:05", "2.5"),
            ("00:00:07.250", "10"),
            ("abc", "-1"),
        ];
        for (start, duration) in windows {
            let window = ClipWindow::new(start, duration);
            let settings = GifSettings {
                fps: 15,
                width: 480,
                scale_flags: "bicubic".into(),
            };
            let palette = palette_command(
                Path::new(FFMPEG),
                Path::new(VIDEO),
                Path::new(PALETTE),
                &window,
                &settings,
            );
            let encode = encode_command(
                Path::new(FFMPEG),
                Path::new(VIDEO),
                Path::new(PALETTE),
                Path::new("out.gif"),
                &window,
                &settings,
            );

            let expected = ["-ss", start, "-t", duration];
            assert_eq!(&palette.get_args()[2..6], expected);
            assert_eq!(&encode.get_args()[2..6], expected);
            let filter = "fps=15,scale=480:-1:flags=bicubic";
            assert!(palette.get_args()[9].to_string_lossy().starts_with(filter));
            assert!(encode.get_args()[11].to_string_lossy().starts_with(filter));
        }
    }
}
