//! CLI command dispatch
//!
//! Routes parsed CLI arguments to the matching handler.

pub mod build;
pub mod completions;
pub mod serve;
pub mod validate;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands};
use crate::error::FolioError;

/// Dispatches a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), FolioError> {
    match cli.command {
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::Validate(args) => validate::run(&args),
        Commands::Build(args) => build::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}
