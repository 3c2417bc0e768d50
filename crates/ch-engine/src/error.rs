use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("invalid policy for persona {persona}: {reason}")]
    InvalidPolicy {
        persona: String,
        reason:  String,
    },

    #[error("unknown strategy {0:?} (expected persona_aware, threshold, or idle)")]
    UnknownStrategy(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
