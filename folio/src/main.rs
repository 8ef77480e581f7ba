//! `Folio` - config-driven portfolio gallery

use std::sync::{Arc, OnceLock};

use clap::Parser;
use tokio_util::sync::CancellationToken;

use folio::cli::args::Cli;
use folio::cli::commands;
use folio::error::{ExitCode, FolioError};
use folio::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests print to stdout and exit 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(FolioError::Usage(e).exit_code());
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();
    let signalled = Arc::new(OnceLock::new());
    spawn_signal_handler(cancel.clone(), Arc::clone(&signalled));

    match commands::dispatch(cli, cancel).await {
        Ok(()) => std::process::exit(signalled.get().copied().unwrap_or(ExitCode::SUCCESS)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Cancels on the first Ctrl+C or SIGTERM and records its exit code; a
/// second signal exits at once.
///
/// Handlers are registered before this returns so a signal arriving during
/// startup is not lost.
#[cfg(unix)]
fn spawn_signal_handler(cancel: CancellationToken, signalled: Arc<OnceLock<i32>>) {
    use tokio::signal::unix::{SignalKind, signal};

    let (Ok(mut sigint), Ok(mut sigterm)) = (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) else {
        tracing::warn!("failed to register signal handlers");
        return;
    };

    tokio::spawn(async move {
        let code = tokio::select! {
            _ = sigint.recv() => ExitCode::INTERRUPTED,
            _ = sigterm.recv() => ExitCode::TERMINATED,
        };
        let _ = signalled.set(code);
        eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
        cancel.cancel();

        tokio::select! {
            _ = sigint.recv() => std::process::exit(ExitCode::INTERRUPTED),
            _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
        }
    });
}

#[cfg(not(unix))]
fn spawn_signal_handler(cancel: CancellationToken, signalled: Arc<OnceLock<i32>>) {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        let _ = signalled.set(ExitCode::INTERRUPTED);
        eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
        cancel.cancel();
        let _ = tokio::signal::ctrl_c().await;
        std::process::exit(ExitCode::INTERRUPTED);
    });
}
