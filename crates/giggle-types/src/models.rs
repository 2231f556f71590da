use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed, named activity with an example video and suggested stickers.
///
/// Challenges are compiled into the binary, so every field borrows static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub video_url: &'static str,
    pub stickers: &'static [&'static str],
}

/// Moderation state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];
}

/// A user video entered into a challenge. This is also the on-disk record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub video_url: String,
    pub challenge_id: String,
    #[serde(default)]
    pub stickers: Vec<String>,
    pub status: SubmissionStatus,
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Pseudo-duration in seconds, fixed at creation.
    pub duration: u32,
}

/// RFC 3339 in UTC with exactly three fractional digits, e.g.
/// `2025-01-01T12:00:00.000Z`, even when the milliseconds are zero.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
