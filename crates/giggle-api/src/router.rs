use axum::{
    Router,
    extract::{OriginalUri, Request},
    handler::Handler,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower::util::MapRequest;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, handle_panic};
use crate::middleware::simulate_delay;
use crate::state::AppState;
use crate::{challenges, preview, submissions};

/// The service to serve: [`router`] with trailing slashes trimmed before
/// routing, so `/challenges/` and `/challenges` are the same resource.
pub type App = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

pub fn app(state: AppState) -> App {
    ServiceBuilder::new()
        .map_request(remember_original_uri as fn(Request) -> Request)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .service(router(state))
}

/// Normalization rewrites the URI; 404 messages report what the client sent.
fn remember_original_uri(mut req: Request) -> Request {
    let uri = req.uri().clone();
    req.extensions_mut().insert(OriginalUri(uri));
    req
}

/// The full HTTP surface. Only submission intake goes through the delay.
pub fn router(state: AppState) -> Router {
    let delayed_create = submissions::create_submission
        .layer(middleware::from_fn_with_state(state.clone(), simulate_delay));

    Router::new()
        .route("/challenges", get(challenges::list_challenges))
        .route(
            "/submissions",
            post(delayed_create).get(submissions::list_submissions),
        )
        .route("/submissions/{id}", get(submissions::get_submission))
        .route("/preview", post(preview::preview_video))
        .route("/health", get(health))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health: liveness check.
async fn health() -> &'static str {
    "ok"
}

async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    ApiError::RouteNotFound { method, path }
}
