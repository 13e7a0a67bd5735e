use thiserror::Error;

// ---

#[derive(Debug, Error)]
pub enum FloodgateError {
    // ---
    #[error("resolve error: {0}")]
    Resolve(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("channel already finished")]
    AlreadyFinished,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ---

pub type Result<T> = std::result::Result<T, FloodgateError>;
