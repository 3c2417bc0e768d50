use ch_snapshot::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway configuration error: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        url:    String,
        status: u16,
        body:   String,
    },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not decode map: {0}")]
    Map(#[from] SnapshotError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
