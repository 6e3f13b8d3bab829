use clap::Parser;
use std::path::PathBuf;

use crate::i18n::Language;
use crate::pipeline::Job;

/// Command line of the `yt2gif` launcher.
#[derive(Parser, Debug)]
#[command(name = "yt2gif")]
#[command(author, version, about = "Download a video and turn a clip of it into a GIF")]
pub struct DispatchCli {
    /// Language of the converter's messages
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    pub lang: Language,

    /// Path to config file (also passed to the converter)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Check that yt-dlp and ffmpeg are available, then exit
    #[arg(long)]
    pub check_tools: bool,

    /// Video URL
    #[arg(required_unless_present = "check_tools")]
    pub url: Option<String>,

    /// Start time in seconds
    #[arg(default_value = "0")]
    pub start: String,

    /// Duration in seconds
    #[arg(default_value = "5")]
    pub duration: String,

    /// Output GIF filename
    #[arg(default_value = "out.gif")]
    pub output: PathBuf,
}

/// Command line of `yt2gif-convert`.
///
/// Help is rendered from the selected message catalog, so clap's own help
/// flag is disabled.
#[derive(Parser, Debug)]
#[command(name = "yt2gif-convert")]
#[command(version, disable_help_flag = true)]
pub struct ConvertCli {
    /// Print usage and exit
    #[arg(short, long)]
    pub help: bool,

    /// Message language
    #[arg(long, value_enum, env = "YT2GIF_LANG", default_value_t = Language::English, hide = true)]
    pub lang: Language,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    pub url: Option<String>,

    #[arg(default_value = "0")]
    pub start: String,

    #[arg(default_value = "5")]
    pub duration: String,

    #[arg(default_value = "out.gif")]
    pub output: PathBuf,
}

impl ConvertCli {
    /// The job described by the positional arguments, if a URL was given.
    pub fn job(&self) -> Option<Job> {
        self.url.as_ref().map(|url| {
            Job::new(
                url.as_str(),
                self.start.as_str(),
                self.duration.as_str(),
                self.output.clone(),
            )
        })
    }
}
