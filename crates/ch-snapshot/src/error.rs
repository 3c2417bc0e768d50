use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not a JSON object: {0}")]
    NotAnObject(String),

    #[error("snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
