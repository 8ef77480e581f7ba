//! HTTP server.
//!
//! Serves the rendered pages with axum. Every request reloads the site's
//! files, so edits to `projects.json` show up on the next page load.
//! Rendering touches the filesystem and runs on the blocking pool.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use folio_core::validation::is_unsafe_asset_name;
use folio_render::ShowcaseFilter;
use folio_render::page::{ExperienceLayout, Layout};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::pages::SiteRenderer;

/// URL prefix under which assets are served.
pub const ASSET_PREFIX: &str = "/assets";

/// Query pairs, kept as a list so `tag` may repeat.
type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Server
// ============================================================================

/// Binds `bind_addr` and serves until `cancel` fires.
///
/// # Errors
///
/// Returns an error if the address is invalid, binding fails, or the
/// server loop fails.
pub async fn serve(
    bind_addr: &str,
    renderer: SiteRenderer,
    cancel: CancellationToken,
) -> Result<(), ServerError> {
    let addr = parse_bind_addr(bind_addr)?;
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let bound_addr = listener.local_addr()?;

    let router = build_router(Arc::new(renderer));
    info!(%bound_addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    debug!("HTTP server shut down");
    Ok(())
}

/// Builds the application router.
pub fn build_router(renderer: Arc<SiteRenderer>) -> Router {
    Router::new()
        .route("/", get(handle_showcase))
        .route("/resume", get(handle_resume))
        .route("/resume.pdf", get(handle_resume_pdf))
        .route("/experience", get(handle_experience))
        .route("/reflections", get(handle_reflections))
        .route("/assets/{*file}", get(handle_asset))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(renderer)
}

/// Normalizes `[host:]port` into a socket address string.
///
/// `":8080"` and `"8080"` bind all interfaces.
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<String, ServerError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("0.0.0.0:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidAddress {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
    Ok(addr)
}

// ============================================================================
// Page Handlers
// ============================================================================

async fn handle_showcase(
    State(renderer): State<Arc<SiteRenderer>>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let filter = ShowcaseFilter {
        query: first(&pairs, "q").map(str::to_string),
        tags: pairs
            .iter()
            .filter(|(k, v)| k == "tag" && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect(),
    };
    let layout = Layout::from_query(first(&pairs, "layout"));
    render_blocking(renderer, move |r| r.showcase(&filter, layout)).await
}

async fn handle_resume(State(renderer): State<Arc<SiteRenderer>>) -> Response {
    render_blocking(renderer, SiteRenderer::resume).await
}

async fn handle_experience(
    State(renderer): State<Arc<SiteRenderer>>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let layout = ExperienceLayout::from_query(first(&pairs, "layout"));
    render_blocking(renderer, move |r| r.experience(layout)).await
}

async fn handle_reflections(State(renderer): State<Arc<SiteRenderer>>) -> Response {
    render_blocking(renderer, SiteRenderer::reflections).await
}

/// Runs a page render on the blocking pool and wraps it as HTML.
async fn render_blocking<F>(renderer: Arc<SiteRenderer>, render: F) -> Response
where
    F: FnOnce(&SiteRenderer) -> folio_render::RenderedPage + Send + 'static,
{
    match tokio::task::spawn_blocking(move || render(&renderer)).await {
        Ok(page) => {
            debug!(items = page.items, missing_assets = page.missing_assets.len(), "page rendered");
            Html(page.html).into_response()
        }
        Err(e) => {
            warn!(error = %e, "render task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response()
        }
    }
}

fn first<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

// ============================================================================
// File Handlers
// ============================================================================

async fn handle_asset(
    State(renderer): State<Arc<SiteRenderer>>,
    UrlPath(file): UrlPath<String>,
) -> Response {
    if is_unsafe_asset_name(&file) {
        debug!(%file, "rejected asset path");
        return StatusCode::NOT_FOUND.into_response();
    }
    let path = renderer.sources().assets.join(&file);
    serve_file(&path, None).await
}

async fn handle_resume_pdf(State(renderer): State<Arc<SiteRenderer>>) -> Response {
    let sources = renderer.sources().clone();
    let loader = renderer.loader().clone();
    let settings = tokio::task::spawn_blocking(move || sources.settings(&loader).0).await;

    let Ok(settings) = settings else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let Some(path) = renderer.sources().resume_path(&settings) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let name = path
        .file_name()
        .map_or_else(|| "resume.pdf".to_string(), |n| n.to_string_lossy().into_owned());
    serve_file(&path, Some(name.as_str())).await
}

/// Reads a file and responds with it, or 404 if it cannot be read.
async fn serve_file(path: &Path, download_name: Option<&str>) -> Response {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file not served");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let mut response = Response::new(Body::from(bytes));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type(path)),
    );
    if let Some(name) = download_name {
        let disposition = format!("attachment; filename=\"{}\"", name.replace('"', ""));
        if let Ok(value) = HeaderValue::from_str(&disposition) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }
    response
}

/// Content type by file extension.
fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("css") => "text/css; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
