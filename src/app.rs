//! Process entry points shared by the two binaries.

use std::ffi::OsString;

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use yt2gif_av::{check_tool, Tool};

use crate::cli::{ConvertCli, DispatchCli};
use crate::config::{self, Config};
use crate::dispatch::{Dispatcher, ForwardedArgs};
use crate::i18n::{Language, MessageKey, Messages};
use crate::pipeline::{Converter, Job};

/// Program name shown in the converter's usage text.
pub const CONVERT_PROGRAM: &str = "yt2gif-convert";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "yt2gif=debug,yt2gif_av=debug".to_string()
        } else {
            "yt2gif=warn,yt2gif_av=warn".to_string()
        }
    });

    // A subscriber may already be installed when called from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Ctrl+C and SIGTERM listeners.
///
/// On Unix the handlers are registered by [`ShutdownSignal::install`], so a
/// signal arriving before [`recv`](ShutdownSignal::recv) is first awaited is
/// still delivered. Must be created inside a tokio runtime.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Option<signal::unix::Signal>,
    #[cfg(unix)]
    terminate: Option<signal::unix::Signal>,
}

impl ShutdownSignal {
    #[cfg(unix)]
    pub fn install() -> Self {
        use signal::unix::SignalKind;

        let listen = |kind: SignalKind, name: &str| match signal::unix::signal(kind) {
            Ok(sig) => Some(sig),
            Err(e) => {
                tracing::error!("Failed to install {} handler: {}", name, e);
                None
            }
        };
        Self {
            interrupt: listen(SignalKind::interrupt(), "Ctrl+C"),
            terminate: listen(SignalKind::terminate(), "SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    pub fn install() -> Self {
        Self {}
    }

    /// Resolves on the next Ctrl+C or SIGTERM.
    #[cfg(unix)]
    pub async fn recv(&mut self) {
        tokio::select! {
            _ = wait_for(self.interrupt.as_mut()) => {},
            _ = wait_for(self.terminate.as_mut()) => {},
        }
    }

    /// Resolves on the next Ctrl+C.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn wait_for(sig: Option<&mut signal::unix::Signal>) {
    match sig {
        Some(sig) => {
            sig.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    ShutdownSignal::install().recv().await
}

/// `yt2gif-convert`: parse `args`, run one conversion, return the exit code.
pub fn convert_main<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = match ConvertCli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => return report_clap_error(e, 1),
    };
    init_logging(cli.verbose);

    let Some(messages) = Messages::for_language(cli.lang) else {
        eprintln!(
            "Error: no messages for language '{}'. Available: {}",
            cli.lang,
            Language::list(&Language::available())
        );
        return 1;
    };

    if cli.help || args.len() <= 1 {
        println!("{}", messages.usage(CONVERT_PROGRAM));
        return 0;
    }

    let Some(job) = cli.job() else {
        eprintln!(
            "{}",
            messages.error_line(&messages.text(MessageKey::MissingUrl))
        );
        eprintln!("{}", messages.usage(CONVERT_PROGRAM));
        return 1;
    };

    let config = match config::load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", messages.error_line(&format!("{:#}", e)));
            return 1;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}", messages.error_line(&e.to_string()));
            return 1;
        }
    };

    rt.block_on(async {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut shutdown = ShutdownSignal::install();
        let signals = tokio::spawn(async move {
            shutdown.recv().await;
            tracing::info!("Signal received, stopping conversion");
            trigger.cancel();
        });

        let code = run_convert(&job, &config, messages, cancel).await;
        signals.abort();
        code
    })
}

/// Run `job` with progress and outcome printed in the language of `messages`.
///
/// Commands are echoed to stdout as `> ...` when the config asks for it. The
/// success line goes to stdout; a failure goes to stderr as one labelled line.
pub async fn run_convert(
    job: &Job,
    config: &Config,
    messages: Messages,
    cancel: CancellationToken,
) -> i32 {
    let mut converter = Converter::from_config(config).with_cancellation(cancel);
    if config.echo_commands {
        converter =
            converter.with_step_callback(Box::new(|_, line: &str| println!("> {}", line)));
    }

    match converter.run(job).await {
        Ok(output) => {
            println!("\n{}", messages.saved(&output));
            0
        }
        Err(e) => {
            eprintln!("{}", messages.error_line(&e.localized(&messages)));
            e.exit_code()
        }
    }
}

/// `yt2gif`: parse `args`, launch the language variant, return its exit code.
pub fn dispatch_main<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match DispatchCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            return report_clap_error(e, code);
        }
    };
    init_logging(cli.verbose);

    if cli.check_tools {
        return match config::load_config_or_default(cli.config.as_deref()) {
            Ok(config) => check_tools(&config),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                1
            }
        };
    }

    let dispatcher = match Dispatcher::beside_current_exe() {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("Error: cannot locate the running executable: {}", e);
            return 1;
        }
    };

    let forwarded = ForwardedArgs {
        url: cli.url.unwrap_or_default(),
        start: cli.start,
        duration: cli.duration,
        output: cli.output,
        config: cli.config,
        verbose: cli.verbose,
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match rt.block_on(dispatcher.dispatch(cli.lang, &forwarded)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn report_clap_error(e: clap::Error, failure_code: i32) -> i32 {
    let _ = e.print();
    if e.use_stderr() {
        failure_code
    } else {
        0
    }
}

fn check_tools(config: &Config) -> i32 {
    println!("Checking external tools...\n");

    let locator = config.tools.locator();
    let mut all_ok = true;

    for tool in Tool::ALL {
        let info = check_tool(&locator, tool);
        let status = if info.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool);

        if let Some(ref version) = info.version {
            print!(" ({})", version);
        }

        match info.path {
            Some(ref path) => print!(" - {}", path.display()),
            None => print!(" - install with: {}", tool.install_hint()),
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
        0
    } else {
        println!("Some tools are missing.");
        1
    }
}
