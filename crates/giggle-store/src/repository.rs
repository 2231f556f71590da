use std::sync::Arc;

use giggle_types::models::Submission;
use tracing::{debug, error, info};

use crate::error::RepositoryError;
use crate::file::SubmissionStore;

/// Create/list/lookup over a [`SubmissionStore`].
///
/// Holds no cached state: every call re-reads the full collection.
#[derive(Clone)]
pub struct SubmissionRepository {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionRepository {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Append `submission` to the collection and hand it back unchanged.
    pub async fn create(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        info!("Creating submission record: {}", submission.id);

        if let Err(source) = self.store.append(submission.clone()).await {
            error!("Error creating submission record {}: {}", submission.id, source);
            return Err(RepositoryError::Create {
                id: submission.id,
                source,
            });
        }

        info!("Submission record created: {}", submission.id);
        Ok(submission)
    }

    pub async fn list_all(&self) -> Result<Vec<Submission>, RepositoryError> {
        let submissions = self.store.read_all().await.map_err(|e| {
            error!("Error fetching submission records: {}", e);
            RepositoryError::Fetch(e)
        })?;

        debug!("Retrieved {} submission records", submissions.len());
        Ok(submissions)
    }

    /// First submission whose id matches, scanning in insertion order.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Submission>, RepositoryError> {
        let found = self
            .list_all()
            .await?
            .into_iter()
            .find(|submission| submission.id == id);

        match &found {
            Some(_) => debug!("Found submission: {}", id),
            None => debug!("Submission not found: {}", id),
        }
        Ok(found)
    }
}
