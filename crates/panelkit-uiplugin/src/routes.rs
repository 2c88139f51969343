//! Route bindings for the UI plugin system.
//!
//! Two surfaces: `GET /ui-plugins` reports the registered plugins as JSON,
//! and for every descriptor that doesn't opt out, `GET /{base}/{*path}`
//! serves its asset tree. Routes are installed in registration order.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::assets::{AssetError, AssetTree};
use crate::registry::{UiPluginInfo, UiPluginRegistry};

#[derive(Debug, Serialize)]
struct UiPluginListResponse {
    plugins: Vec<UiPluginInfo>,
}

/// Build the router exposing the plugin listing and static asset routes.
///
/// The bare base path (`/{base}/`) resolves to `index.html` within the
/// plugin's asset tree. When two mounted descriptors share a base the
/// first one wins; later ones are skipped with a warning (axum rejects
/// conflicting route registrations outright).
pub fn ui_plugin_router(registry: Arc<UiPluginRegistry>) -> Router {
    let listing = registry.clone();
    let mut router = Router::new().route(
        "/ui-plugins",
        get(move || {
            let plugins = listing.infos();
            async move { Json(UiPluginListResponse { plugins }) }
        }),
    );

    let mut mounted: HashSet<String> = HashSet::new();
    for p in registry.plugins() {
        if p.ignore_route {
            continue;
        }
        if !mounted.insert(p.base.clone()) {
            tracing::warn!(
                base = %p.base,
                name = %p.name,
                "duplicate plugin base, keeping the first mounted route"
            );
            continue;
        }

        let index_assets = p.assets.clone();
        let assets = p.assets.clone();
        router = router
            .route(
                &format!("/{}/", p.base),
                get(move || serve_asset(index_assets.clone(), "index.html".to_string())),
            )
            .route(
                &format!("/{}/{{*path}}", p.base),
                get(move |Path(path): Path<String>| serve_asset(assets.clone(), path)),
            );

        tracing::debug!(base = %p.base, name = %p.name, "mounted UI plugin route");
    }

    router
}

/// Resolve `path` against the tree and answer with the file bytes.
///
/// Content type comes from the file extension. Not-found (including
/// traversal attempts, which the tree reports as not-found) maps to 404;
/// any other read fault maps to 500.
async fn serve_asset(assets: Arc<dyn AssetTree>, path: String) -> Response {
    match assets.read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();
            (StatusCode::OK, [(header::CONTENT_TYPE, mime)], bytes).into_response()
        }
        Err(AssetError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(AssetError::Io(e)) => {
            tracing::error!(%path, "failed to read plugin asset: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
