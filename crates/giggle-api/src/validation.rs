use serde_json::Value;
use thiserror::Error;

use crate::catalog::is_known_challenge;

/// Longest pseudo-duration a submission may have.
pub const MAX_DURATION_SECS: u32 = 15;

/// Rejected request input. The display text is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("videoUrl is required and must be a string")]
    VideoUrl,

    #[error("challengeId is required and must be a valid challenge ID")]
    ChallengeId,

    #[error("stickers must be an array")]
    StickersNotArray,

    #[error("stickers must be an array of strings")]
    StickerNotString,

    #[error("Video duration exceeds {} seconds limit", MAX_DURATION_SECS)]
    DurationExceeded { duration: u32 },
}

/// Submission input that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub video_url: String,
    pub challenge_id: String,
    pub stickers: Vec<String>,
    pub duration: u32,
}

/// Stand-in for real video length detection: the sum of the URL's UTF-16
/// character codes, modulo 20, plus one. Always in `1..=20`.
pub fn derive_duration(video_url: &str) -> u32 {
    let sum: u64 = video_url.encode_utf16().map(u64::from).sum();
    (sum % 20) as u32 + 1
}

/// Checks run in a fixed order and the first failure wins.
pub fn validate_submission_input(body: &Value) -> Result<ValidatedSubmission, ValidationError> {
    let video_url = required_video_url(body)?;

    let challenge_id = body
        .get("challengeId")
        .and_then(Value::as_str)
        .filter(|id| is_known_challenge(id))
        .ok_or(ValidationError::ChallengeId)?;

    let stickers = match body.get("stickers") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or(ValidationError::StickerNotString)
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ValidationError::StickersNotArray),
    };

    let duration = derive_duration(video_url);
    if duration > MAX_DURATION_SECS {
        return Err(ValidationError::DurationExceeded { duration });
    }

    Ok(ValidatedSubmission {
        video_url: video_url.to_owned(),
        challenge_id: challenge_id.to_owned(),
        stickers,
        duration,
    })
}

pub fn validate_preview_input(body: &Value) -> Result<String, ValidationError> {
    required_video_url(body).map(str::to_owned)
}

fn required_video_url(body: &Value) -> Result<&str, ValidationError> {
    body.get("videoUrl")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .ok_or(ValidationError::VideoUrl)
}
