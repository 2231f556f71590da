use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{SubsecRound, Utc};
use giggle_types::api::MessageResponse;
use giggle_types::models::{Submission, SubmissionStatus};
use rand::Rng;
use tracing::info;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::validation::validate_submission_input;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// POST /submissions: validate, store as pending, acknowledge without echoing the record.
pub async fn create_submission(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, ApiError> {
    info!("Processing new submission request");

    let input = validate_submission_input(&body)?;

    let submission = Submission {
        id: generate_submission_id(),
        video_url: input.video_url,
        challenge_id: input.challenge_id,
        stickers: input.stickers,
        status: SubmissionStatus::Pending,
        created_at: Utc::now().trunc_subsecs(3),
        duration: input.duration,
    };

    let submission = state
        .repo
        .create(submission)
        .await
        .map_err(|_| ApiError::Internal("Failed to create submission"))?;

    info!("Submission created successfully: {}", submission.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Submission pending review by moderator".into(),
        }),
    ))
}

/// GET /submissions
///
/// Each returned copy carries a freshly drawn status; what is stored stays
/// `pending`. Two calls in a row can disagree about the same submission.
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    info!("Fetching all submissions");

    let submissions = state
        .repo
        .list_all()
        .await
        .map_err(|_| ApiError::Internal("Failed to fetch submissions"))?;

    let submissions = overlay_random_status(submissions);
    info!("Returning {} submissions", submissions.len());
    Ok(Json(submissions))
}

/// GET /submissions/{id}: the record exactly as stored.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError> {
    let found = state.repo.get_by_id(&id).await?;
    found.map(Json).ok_or(ApiError::SubmissionNotFound(id))
}

fn overlay_random_status(mut submissions: Vec<Submission>) -> Vec<Submission> {
    let mut rng = rand::rng();
    for submission in &mut submissions {
        submission.status = SubmissionStatus::ALL[rng.random_range(0..SubmissionStatus::ALL.len())];
    }
    submissions
}

/// `submission-<unix millis>-<9 base36 chars>`
fn generate_submission_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();

    format!("submission-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn submission_ids_have_timestamp_and_base36_suffix() {
        let id = generate_submission_id();
        let mut parts = id.splitn(3, '-');

        assert_eq!(parts.next(), Some("submission"));
        assert!(parts.next().unwrap().parse::<i64>().unwrap() > 0);
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn submission_ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_submission_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn overlay_touches_only_status() {
        let original = Submission {
            id: "submission-1-aaaaaaaaa".into(),
            video_url: "https://example.com/a.mp4".into(),
            challenge_id: "challenge-1".into(),
            stickers: vec![],
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
            duration: 12,
        };

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let overlaid = overlay_random_status(vec![original.clone()]).remove(0);
            assert_eq!(
                Submission {
                    status: SubmissionStatus::Pending,
                    ..overlaid.clone()
                },
                original
            );
            seen.insert(overlaid.status);
        }
        assert_eq!(seen.len(), SubmissionStatus::ALL.len());
    }
}
