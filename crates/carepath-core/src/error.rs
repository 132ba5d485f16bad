use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("invalid user handle: {0:?}")]
    InvalidUserHandle(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
