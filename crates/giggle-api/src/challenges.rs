use axum::Json;
use giggle_types::models::Challenge;
use tracing::info;

use crate::catalog;

/// GET /challenges
pub async fn list_challenges() -> Json<&'static [Challenge]> {
    let challenges = catalog::list_challenges();
    info!("Returning {} challenges", challenges.len());
    Json(challenges)
}
