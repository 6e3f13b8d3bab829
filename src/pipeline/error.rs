//! Conversion failures and how they are reported.

use std::fmt;

use crate::i18n::{MessageKey, Messages};
use yt2gif_av::{TemplateContext, Tool};

/// Exit code for an interrupted run (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// One of the three external-tool steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Download,
    Palette,
    Encode,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Download => "download",
            Step::Palette => "palette",
            Step::Encode => "encode",
        })
    }
}

/// What went wrong when a step's tool ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    /// The full command line.
    pub command: String,
    /// Exit code; `None` if the process was killed by a signal or never started.
    pub code: Option<i32>,
    /// Set when the process could not be started at all.
    pub spawn_error: Option<String>,
}

impl ToolFailure {
    /// The value shown after `rc=`.
    pub fn code_text(&self) -> String {
        match (&self.spawn_error, self.code) {
            (Some(reason), _) => reason.clone(),
            (None, Some(code)) => code.to_string(),
            (None, None) => "signal".to_string(),
        }
    }
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command failed: {} (rc={})", self.command, self.code_text())
    }
}

/// Error kinds, independent of the data each error carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ToolNotFound,
    Workspace,
    DownloadFailed,
    PaletteFailed,
    EncodeFailed,
    Interrupted,
}

/// A fatal conversion error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A required executable is not on the search path.
    #[error("'{tool}' not found")]
    ToolNotFound { tool: Tool },

    /// The temporary workspace could not be created.
    #[error("workspace error: {0}")]
    Workspace(String),

    #[error("download failed: {0}")]
    DownloadFailed(ToolFailure),

    #[error("palette generation failed: {0}")]
    PaletteFailed(ToolFailure),

    #[error("encode failed: {0}")]
    EncodeFailed(ToolFailure),

    /// The run was cancelled by a signal.
    #[error("interrupted")]
    Interrupted,
}

impl ConvertError {
    pub(crate) fn step_failed(step: Step, failure: ToolFailure) -> Self {
        match step {
            Step::Download => Self::DownloadFailed(failure),
            Step::Palette => Self::PaletteFailed(failure),
            Step::Encode => Self::EncodeFailed(failure),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolNotFound { .. } => ErrorKind::ToolNotFound,
            Self::Workspace(_) => ErrorKind::Workspace,
            Self::DownloadFailed(_) => ErrorKind::DownloadFailed,
            Self::PaletteFailed(_) => ErrorKind::PaletteFailed,
            Self::EncodeFailed(_) => ErrorKind::EncodeFailed,
            Self::Interrupted => ErrorKind::Interrupted,
        }
    }

    /// The failing tool's details, for the three step failures.
    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            Self::DownloadFailed(f) | Self::PaletteFailed(f) | Self::EncodeFailed(f) => Some(f),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => 1,
        }
    }

    /// The error message in the given language, without the error label.
    pub fn localized(&self, messages: &Messages) -> String {
        match self {
            Self::ToolNotFound { tool } => messages.render(
                MessageKey::ToolNotFound,
                &TemplateContext::new()
                    .with_var("tool", tool.program())
                    .with_var("install", tool.install_hint()),
            ),
            Self::Workspace(reason) => messages.render(
                MessageKey::WorkspaceFailed,
                &TemplateContext::new().with_var("reason", reason.as_str()),
            ),
            Self::DownloadFailed(failure)
            | Self::PaletteFailed(failure)
            | Self::EncodeFailed(failure) => messages.render(
                MessageKey::CommandFailed,
                &TemplateContext::new()
                    .with_var("command", failure.command.as_str())
                    .with_var("code", failure.code_text()),
            ),
            Self::Interrupted => messages.text(MessageKey::Interrupted),
        }
    }
}
