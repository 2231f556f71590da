use axum::Json;
use chrono::Utc;
use giggle_types::api::{PreviewMetadata, PreviewResponse};
use rand::Rng;
use tracing::info;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::validation::{MAX_DURATION_SECS, derive_duration, validate_preview_input};

/// POST /preview: mock metadata for a video URL without storing anything.
pub async fn preview_video(JsonBody(body): JsonBody) -> Result<Json<PreviewResponse>, ApiError> {
    let video_url = validate_preview_input(&body)?;
    let duration = derive_duration(&video_url);

    let preview = PreviewResponse {
        thumbnail_url: format!(
            "https://example.com/thumbnails/{}.jpg",
            Utc::now().timestamp_millis()
        ),
        is_valid: duration <= MAX_DURATION_SECS,
        metadata: PreviewMetadata {
            format: "mp4".into(),
            resolution: "1080x1920".into(),
            file_size: format!("{}MB", rand::rng().random_range(10..60)),
        },
        video_url,
        duration,
    };

    info!("Preview generated for video: {}", preview.video_url);
    Ok(Json(preview))
}
