use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the on-disk submission document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read submissions from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write submissions to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode submissions in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode submissions: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// The filesystem error kind behind this failure, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source.kind()),
            Self::Decode { .. } | Self::Encode(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to create submission record {id}")]
    Create {
        id: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to fetch submission records")]
    Fetch(#[source] StoreError),
}

impl RepositoryError {
    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Create { source, .. } | Self::Fetch(source) => source,
        }
    }

    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        self.store_error().io_kind()
    }
}
