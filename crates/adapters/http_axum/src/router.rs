//! Axum router assembly.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use navhub_app::ports::{AdminVerifier, CategoryRepository, ServiceRepository, SettingsRepository};

use crate::auth::require_admin;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Public API routes live under `/api`, admin routes under `/api/admin`
/// behind the bearer-token guard. When `assets` is given, every other path
/// is served from that directory, falling back to its `index.html` so the
/// dashboard's client-side routes resolve. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level.
pub fn build<S, C, T, V>(state: AppState<S, C, T, V>, assets: Option<&Path>) -> Router
where
    S: ServiceRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    T: SettingsRepository + Send + Sync + 'static,
    V: AdminVerifier + Send + Sync + 'static,
{
    let guard = middleware::from_fn_with_state(Arc::clone(&state.verifier), require_admin::<V>);
    let api = crate::api::public_routes::<S, C, T, V>()
        .nest("/admin", crate::api::admin_routes::<S, C, T, V>().route_layer(guard));

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api);

    if let Some(dir) = assets {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
