use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active session; run `kw session start`")]
    NotActive,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt session snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
