//! `folio serve`

use folio_core::ConfigLoader;
use folio_render::Routes;
use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::error::FolioError;
use crate::pages::SiteRenderer;
use crate::server::{self, ASSET_PREFIX};

/// Serves the portfolio until cancelled.
///
/// A missing site root is reported up front; missing or broken files
/// inside it only produce notices on the rendered pages.
///
/// # Errors
///
/// Returns an I/O error if the site root does not exist, or a server
/// error if binding or serving fails.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), FolioError> {
    let sources = args.source.sources();
    if !sources.root.is_dir() {
        return Err(FolioError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("site root not found: {}", sources.root.display()),
        )));
    }
    tracing::info!(
        root = %sources.root.display(),
        projects = %sources.projects.display(),
        "serving portfolio"
    );
    if !sources.projects.exists() {
        tracing::warn!(path = %sources.projects.display(), "projects file missing; pages will show an empty gallery");
    }

    let renderer = SiteRenderer::new(
        sources,
        ConfigLoader::with_defaults(),
        Routes::server(),
        ASSET_PREFIX,
    );
    server::serve(&args.bind, renderer, cancel).await?;
    Ok(())
}
