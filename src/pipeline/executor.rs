use std::fmt;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use yt2gif_av::actions::{
    download_command, encode_command, palette_command, ClipWindow, DownloadOptions, GifSettings,
};
use yt2gif_av::{Tool, ToolCommand, ToolLocator, ToolPaths, Workspace};

use super::error::{ConvertError, Step, ToolFailure};
use crate::config::Config;

/// Called with each step and its command line just before the tool runs
pub type StepCallback = Box<dyn Fn(Step, &str) + Send + Sync>;

/// One conversion request. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub url: String,
    pub window: ClipWindow,
    pub output: PathBuf,
}

impl Job {
    pub fn new(
        url: impl Into<String>,
        start: impl Into<String>,
        duration: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            window: ClipWindow::new(start, duration),
            output: output.into(),
        }
    }
}

/// Progress through a run. Any failure ends the run from whichever stage it
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NotStarted,
    ToolsResolved,
    WorkspaceReady,
    Downloaded,
    PaletteBuilt,
    Encoded,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Runs the download -> palette -> encode sequence for one job.
pub struct Converter {
    locator: ToolLocator,
    download: DownloadOptions,
    gif: GifSettings,
    workspace_parent: Option<PathBuf>,
    cancellation: CancellationToken,
    step_callback: Option<StepCallback>,
}

impl Converter {
    pub fn new(locator: ToolLocator) -> Self {
        Self {
            locator,
            download: DownloadOptions::default(),
            gif: GifSettings::default(),
            workspace_parent: None,
            cancellation: CancellationToken::new(),
            step_callback: None,
        }
    }

    /// Build a converter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tools.locator())
            .with_download_options(DownloadOptions::from(&config.download))
            .with_gif_settings(GifSettings::from(&config.gif))
            .with_workspace_parent(config.workspace.parent.clone())
    }

    pub fn with_download_options(mut self, options: DownloadOptions) -> Self {
        self.download = options;
        self
    }

    pub fn with_gif_settings(mut self, settings: GifSettings) -> Self {
        self.gif = settings;
        self
    }

    /// Create workspaces inside `parent` instead of the system temp dir.
    pub fn with_workspace_parent(mut self, parent: Option<PathBuf>) -> Self {
        self.workspace_parent = parent;
        self
    }

    /// Abort the run (killing any running tool) once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_step_callback(mut self, callback: StepCallback) -> Self {
        self.step_callback = Some(callback);
        self
    }

    /// Run the whole conversion, returning the output path.
    ///
    /// Tools are resolved before anything touches the filesystem. The
    /// workspace is owned by this call and removed when it returns, whatever
    /// the outcome.
    pub async fn run(&self, job: &Job) -> Result<PathBuf, ConvertError> {
        let mut stage = Stage::NotStarted;
        tracing::info!(
            "Converting {} [{} +{}] -> {:?}",
            job.url,
            job.window.start,
            job.window.duration,
            job.output
        );
        if !output_parent_exists(&job.output) {
            tracing::warn!("Output directory does not exist: {:?}", job.output.parent());
        }

        let result = self.run_stages(job, &mut stage).await;
        match &result {
            Ok(_) => tracing::info!("Conversion finished at stage {}", stage),
            Err(e) => tracing::warn!("Conversion failed after stage {}: {}", stage, e),
        }
        result
    }

    async fn run_stages(&self, job: &Job, stage: &mut Stage) -> Result<PathBuf, ConvertError> {
        let tools = self.resolve_tools()?;
        advance(stage, Stage::ToolsResolved);

        let workspace = Workspace::new(self.workspace_parent.as_deref())
            .map_err(|e| ConvertError::Workspace(e.to_string()))?;
        advance(stage, Stage::WorkspaceReady);

        let video = workspace.video();
        let palette = workspace.palette();

        self.run_step(
            Step::Download,
            download_command(&tools.downloader, &job.url, &video, &self.download),
        )
        .await?;
        advance(stage, Stage::Downloaded);

        self.run_step(
            Step::Palette,
            palette_command(&tools.transcoder, &video, &palette, &job.window, &self.gif),
        )
        .await?;
        advance(stage, Stage::PaletteBuilt);

        self.run_step(
            Step::Encode,
            encode_command(
                &tools.transcoder,
                &video,
                &palette,
                &job.output,
                &job.window,
                &self.gif,
            ),
        )
        .await?;
        advance(stage, Stage::Encoded);

        workspace.cleanup();
        Ok(job.output.clone())
    }

    /// Downloader first, so it is the one reported when both are missing.
    fn resolve_tools(&self) -> Result<ToolPaths, ConvertError> {
        let find = |tool| {
            self.locator
                .find(tool)
                .ok_or(ConvertError::ToolNotFound { tool })
        };
        Ok(ToolPaths {
            downloader: find(Tool::Downloader)?,
            transcoder: find(Tool::Transcoder)?,
        })
    }

    async fn run_step(&self, step: Step, cmd: ToolCommand) -> Result<(), ConvertError> {
        if self.cancellation.is_cancelled() {
            return Err(ConvertError::Interrupted);
        }

        let line = cmd.display();
        if let Some(ref callback) = self.step_callback {
            callback(step, &line);
        }

        match cmd.execute(&self.cancellation).await {
            Ok(_) => Ok(()),
            Err(yt2gif_av::Error::Interrupted { .. }) => Err(ConvertError::Interrupted),
            Err(yt2gif_av::Error::ToolFailed { command, code, .. }) => Err(
                ConvertError::step_failed(
                    step,
                    ToolFailure {
                        command,
                        code,
                        spawn_error: None,
                    },
                ),
            ),
            Err(other) => Err(ConvertError::step_failed(
                step,
                ToolFailure {
                    command: line,
                    code: None,
                    spawn_error: Some(other.to_string()),
                },
            )),
        }
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!("Stage {} -> {}", stage, next);
    *stage = next;
}

/// Whether `path`'s parent directory exists. It is never created here.
fn output_parent_exists(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_keeps_window_verbatim() {
        let job = Job::new("https://example.test/v", "00:01:02.5", "3", "clip.gif");
        assert_eq!(job.window.start, "00:01:02.5");
        assert_eq!(job.window.duration, "3");
        assert_eq!(job.output, PathBuf::from("clip.gif"));
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::NotStarted < Stage::ToolsResolved);
        assert!(Stage::PaletteBuilt < Stage::Encoded);
        assert_eq!(Stage::WorkspaceReady.to_string(), "WorkspaceReady");
    }

    #[test]
    fn output_parent_check() {
        assert!(output_parent_exists(Path::new("out.gif")));
        assert!(output_parent_exists(&std::env::temp_dir().join("out.gif")));
        assert!(!output_parent_exists(Path::new("/nonexistent/dir/out.gif")));
    }
}
