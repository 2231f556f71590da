use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;

/// Hold the request for a random interval before passing it on.
/// Only this request is suspended; the runtime keeps serving others.
pub async fn simulate_delay(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let delay = state.intake_delay.sample();
    debug!("Simulating processing delay: {}ms", delay.as_millis());

    tokio::time::sleep(delay).await;
    next.run(req).await
}
