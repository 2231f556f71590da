use serde::Serialize;

// -- Generic bodies --

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

// -- Preview --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub video_url: String,
    pub duration: u32,
    pub thumbnail_url: String,
    pub is_valid: bool,
    pub metadata: PreviewMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMetadata {
    pub format: String,
    pub resolution: String,
    pub file_size: String,
}
