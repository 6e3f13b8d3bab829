//! Language dispatch.
//!
//! The `yt2gif` launcher maps a language token to a converter variant and runs
//! it as a child process with the user's positional arguments, then exits
//! with the child's status.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};

use crate::app::ShutdownSignal;
use crate::i18n::Language;

/// File name of the converter binary, installed next to the launcher.
pub const CONVERTER_BIN: &str = "yt2gif-convert";

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("language variant not found: {detail}\nAvailable languages: {available}")]
    VariantNotFound { detail: String, available: String },

    #[error("Failed to execute {}: {source}", .program.display())]
    LaunchFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    fn variant_not_found(detail: impl Into<String>) -> Self {
        Self::VariantNotFound {
            detail: detail.into(),
            available: Language::list(&Language::available()),
        }
    }
}

/// Arguments forwarded verbatim to the selected variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedArgs {
    pub url: String,
    pub start: String,
    pub duration: String,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// A runnable converter for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub language: Language,
    pub program: PathBuf,
}

impl Variant {
    /// Command line for the child, excluding the program itself.
    pub fn args(&self, forwarded: &ForwardedArgs) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--lang".into(), self.language.as_str().into()];
        if let Some(ref config) = forwarded.config {
            args.push("--config".into());
            args.push(config.into());
        }
        if forwarded.verbose {
            args.push("--verbose".into());
        }
        args.push("--".into());
        args.push(forwarded.url.as_str().into());
        args.push(forwarded.start.as_str().into());
        args.push(forwarded.duration.as_str().into());
        args.push(forwarded.output.as_os_str().to_owned());
        args
    }
}

/// Selects and runs converter variants.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    converter: PathBuf,
}

impl Dispatcher {
    pub fn new(converter: impl Into<PathBuf>) -> Self {
        Self {
            converter: converter.into(),
        }
    }

    /// A dispatcher for the converter installed beside the running executable.
    pub fn beside_current_exe() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(dir.join(format!(
            "{}{}",
            CONVERTER_BIN,
            std::env::consts::EXE_SUFFIX
        ))))
    }

    pub fn converter(&self) -> &Path {
        &self.converter
    }

    /// Find the variant for `language`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::VariantNotFound`] when no catalog ships for the
    /// language or the converter binary is missing.
    pub fn locate(&self, language: Language) -> Result<Variant, DispatchError> {
        if language.catalog().is_none() {
            return Err(DispatchError::variant_not_found(format!(
                "no messages for '{}'",
                language
            )));
        }
        if !self.converter.is_file() {
            return Err(DispatchError::variant_not_found(format!(
                "'{}' expects {}",
                language,
                self.converter.display()
            )));
        }
        Ok(Variant {
            language,
            program: self.converter.clone(),
        })
    }

    /// Run the variant for `language` and return its exit code.
    ///
    /// The child shares this process's stdio. Signals received while it runs
    /// are passed on to it and the launcher keeps waiting, so the child's exit
    /// code (130 for an interrupted conversion) is what gets reported.
    pub async fn dispatch(
        &self,
        language: Language,
        forwarded: &ForwardedArgs,
    ) -> Result<i32, DispatchError> {
        let variant = self.locate(language)?;
        let launch_failed = |source| DispatchError::LaunchFailed {
            program: variant.program.clone(),
            source,
        };

        let mut shutdown = ShutdownSignal::install();
        tracing::debug!("Launching {:?} for {}", variant.program, language);
        let mut child = Command::new(&variant.program)
            .args(variant.args(forwarded))
            .stdin(Stdio::inherit())
            .spawn()
            .map_err(launch_failed)?;

        let status = loop {
            tokio::select! {
                status = child.wait() => break status.map_err(launch_failed)?,
                _ = shutdown.recv() => {
                    tracing::info!("Signal received, waiting for converter to exit");
                    forward_terminate(&child);
                }
            }
        };

        let code = exit_code(status);
        tracing::debug!("Converter exited with {}", code);
        Ok(code)
    }
}

#[cfg(unix)]
fn forward_terminate(child: &Child) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let Some(id) = child.id() else {
        return;
    };
    if let Err(e) = kill(Pid::from_raw(id as i32), Signal::SIGTERM) {
        tracing::warn!("Failed to forward SIGTERM to converter: {}", e);
    }
}

#[cfg(not(unix))]
fn forward_terminate(_child: &Child) {}

/// The code to exit with for a finished child: its own code, or 128 plus the
/// signal number if it was killed.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
