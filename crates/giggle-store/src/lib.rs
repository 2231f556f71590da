pub mod error;
pub mod file;
pub mod repository;

pub use error::{RepositoryError, StoreError};
pub use file::{JsonFileStore, SubmissionStore};
pub use repository::SubmissionRepository;
