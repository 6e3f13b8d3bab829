//! Error types for yt2gif-av.

use crate::Tool;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the external tools.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: Tool },

    /// An external tool ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("command failed: {command} (rc={})", display_code(.code))]
    ToolFailed {
        tool: String,
        command: String,
        code: Option<i32>,
    },

    /// The operating system refused to start the tool.
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool was killed because the run was cancelled.
    #[error("{tool} interrupted")]
    Interrupted { tool: String },

    /// Workspace error.
    #[error("workspace error: {0}")]
    Workspace(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: Tool) -> Self {
        Self::ToolNotFound { tool }
    }

    /// Create a tool failure error.
    pub fn tool_failed(
        tool: impl Into<String>,
        command: impl Into<String>,
        code: Option<i32>,
    ) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            command: command.into(),
            code,
        }
    }

    /// Exit code of the failed tool, if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ToolFailed { code, .. } => *code,
            _ => None,
        }
    }
}
