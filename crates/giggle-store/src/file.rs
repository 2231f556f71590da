use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use giggle_types::models::Submission;
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::StoreError;

/// Whole-collection persistence for submissions.
///
/// Implementations hand out and accept the full ordered collection; there is
/// no partial access and no locking. Two writers racing through
/// [`SubmissionStore::append`] can lose one another's update.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Load every stored submission in insertion order.
    /// A store that has never been written reads as empty.
    async fn read_all(&self) -> Result<Vec<Submission>, StoreError>;

    /// Replace the stored collection with `submissions`.
    async fn write_all(&self, submissions: &[Submission]) -> Result<(), StoreError>;

    /// Read-modify-write a single new submission onto the end of the collection.
    async fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let mut submissions = self.read_all().await?;
        submissions.push(submission);
        self.write_all(&submissions).await
    }
}

/// Submissions kept as one pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use `path` as the backing document, creating its parent directory.
    /// The document itself is only created by the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        info!("Submission store file: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling scratch file the next document is written to before the rename.
    fn scratch_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("submissions.json"));
        name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<Submission>, StoreError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, reading as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let submissions: Vec<Submission> =
            serde_json::from_slice(&data).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!("Read {} submissions from {}", submissions.len(), self.path.display());
        Ok(submissions)
    }

    async fn write_all(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(submissions).map_err(StoreError::Encode)?;

        // Write then rename so readers never see a half-written document
        let scratch = self.scratch_path();
        fs::write(&scratch, &json)
            .await
            .map_err(|source| StoreError::Write {
                path: scratch.clone(),
                source,
            })?;

        if let Err(source) = fs::rename(&scratch, &self.path).await {
            if let Err(e) = fs::remove_file(&scratch).await {
                warn!("Failed to remove scratch file {}: {}", scratch.display(), e);
            }
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!("Wrote {} submissions to {}", submissions.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::submission;

    #[tokio::test]
    async fn missing_document_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("submissions.json"))
            .await
            .unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/submissions.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn write_all_replaces_document_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("submissions.json"))
            .await
            .unwrap();

        store
            .write_all(&[submission("a"), submission("b")])
            .await
            .unwrap();
        store.write_all(&[submission("c")]).await.unwrap();

        let ids: Vec<_> = store
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["c"]);
    }

    #[tokio::test]
    async fn document_is_a_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        store.write_all(&[submission("a")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"a\""));
        assert!(text.contains("\"videoUrl\""));
    }

    #[tokio::test]
    async fn append_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("submissions.json"))
            .await
            .unwrap();

        for id in ["first", "second", "third"] {
            store.append(submission(id)).await.unwrap();
        }

        let ids: Vec<_> = store
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn no_scratch_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("submissions.json"))
            .await
            .unwrap();

        store.append(submission("a")).await.unwrap();
        store.append(submission("b")).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["submissions.json"]);
    }

    #[tokio::test]
    async fn corrupt_document_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::open(&path).await.unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
        assert_eq!(err.io_kind(), None);
    }

    #[tokio::test]
    async fn unreadable_document_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the document should be fails to read as a file
        let path = dir.path().join("submissions.json");
        std::fs::create_dir(&path).unwrap();
        let store = JsonFileStore::open(&path).await.unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
