//! Builder for executing external tool commands with cancellation support.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// A builder for constructing and executing external tool invocations.
///
/// The child's stdin is closed; stdout and stderr are the parent's, so the
/// tool's own progress output reaches the user unchanged.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use tokio_util::sync::CancellationToken;
/// use yt2gif_av::ToolCommand;
///
/// # async fn example() -> yt2gif_av::Result<()> {
/// let mut cmd = ToolCommand::new(PathBuf::from("ffmpeg"));
/// cmd.arg("-v").arg("warning").arg("-version");
/// let status = cmd.execute(&CancellationToken::new()).await?;
/// assert!(status.success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<OsString>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<OsString>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// The arguments added so far, excluding the program.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// The command line as shown to the user: program path followed by the
    /// arguments, space-separated. Non-UTF-8 bytes are shown replaced; the
    /// arguments passed to the process are not.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Run the command to completion.
    ///
    /// Blocks the calling task until the child exits. If `cancel` fires first
    /// the child is killed and reaped before returning.
    ///
    /// # Errors
    ///
    /// - [`Error::Spawn`] if the process could not be started.
    /// - [`Error::ToolFailed`] if it exited with a non-zero status.
    /// - [`Error::Interrupted`] if `cancel` fired while it was running.
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<ExitStatus> {
        let tool = self.program_name();

        if cancel.is_cancelled() {
            return Err(Error::Interrupted { tool });
        }

        tracing::info!("Running: {}", self.display());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                tool: tool.clone(),
                source,
            })?;

        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Cancelled, killing {}", tool);
                if let Err(e) = child.kill().await {
                    tracing::warn!("Failed to kill {}: {}", tool, e);
                }
                return Err(Error::Interrupted { tool });
            }
            status = child.wait() => status?,
        };

        if !status.success() {
            return Err(self.exit_error(tool, status, cancel.is_cancelled()));
        }

        tracing::debug!("{} finished", tool);
        Ok(status)
    }

    /// Error for a non-zero exit. A terminal Ctrl-C reaches the tool and this
    /// process together, so a failure seen after cancellation is an interrupt.
    fn exit_error(&self, tool: String, status: ExitStatus, cancelled: bool) -> Error {
        if cancelled {
            tracing::warn!("{} exited with {} after cancellation", tool, status);
            return Error::Interrupted { tool };
        }
        tracing::warn!("{} exited with {}", tool, status);
        Error::tool_failed(tool, self.display(), status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn sh(script: &str) -> ToolCommand {
        let mut cmd = ToolCommand::new(PathBuf::from("/bin/sh"));
        cmd.args(["-c", script]);
        cmd
    }

    #[test]
    fn display_joins_program_and_args() {
        let mut cmd = ToolCommand::new(PathBuf::from("/usr/bin/ffmpeg"));
        cmd.args(["-ss", "10", "-t", "5"]);
        assert_eq!(cmd.display(), "/usr/bin/ffmpeg -ss 10 -t 5");
        assert_eq!(cmd.get_args(), ["-ss", "10", "-t", "5"]);
    }

    #[test]
    fn non_utf8_arguments_are_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let name = std::ffi::OsStr::from_bytes(b"clip\xff.gif");
        let mut cmd = ToolCommand::new(PathBuf::from("ffmpeg"));
        cmd.arg("-y").arg(name);
        assert_eq!(cmd.get_args()[1].as_os_str(), name);
        assert_eq!(cmd.display(), "ffmpeg -y clip\u{FFFD}.gif");
    }

    #[test]
    fn failure_after_cancellation_is_an_interrupt() {
        use std::os::unix::process::ExitStatusExt;

        let cmd = sh("exit 1");
        let status = ExitStatus::from_raw(1 << 8);
        assert_matches!(
            cmd.exit_error("sh".into(), status, true),
            Error::Interrupted { .. }
        );
        assert_matches!(
            cmd.exit_error("sh".into(), status, false),
            Error::ToolFailed { code: Some(1), .. }
        );
    }

    #[tokio::test]
    async fn execute_success() {
        let status = sh("exit 0").execute(&CancellationToken::new()).await.unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn execute_nonzero_carries_code() {
        let result = sh("exit 3").execute(&CancellationToken::new()).await;
        assert_matches!(result, Err(Error::ToolFailed { code: Some(3), .. }));
    }

    #[tokio::test]
    async fn execute_nonexistent_tool() {
        let result = ToolCommand::new(PathBuf::from("/nonexistent/tool_xyz_12345"))
            .execute(&CancellationToken::new())
            .await;
        assert_matches!(result, Err(Error::Spawn { .. }));
    }

    #[tokio::test]
    async fn already_cancelled_does_not_spawn() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = ToolCommand::new(PathBuf::from("/nonexistent/tool_xyz_12345"))
            .execute(&cancel)
            .await;
        assert_matches!(result, Err(Error::Interrupted { .. }));
    }

    #[tokio::test]
    async fn cancellation_kills_running_child() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            sh("while :; do :; done").execute(&cancel),
        )
        .await
        .expect("child was not killed");
        assert_matches!(result, Err(Error::Interrupted { .. }));
    }
}
