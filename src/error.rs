use thiserror::Error;

/// Errors raised at the fallible edges of the engine.
///
/// Edit operations on a [`Thread`](crate::thread::Thread) never fail; they
/// report an [`EditOutcome`](crate::thread::EditOutcome) instead. These
/// variants cover finalizing a thread, configuration and platform lookup.
#[derive(Error, Debug)]
pub enum ThreadError {
    #[error("Thread has {count} segment(s) over the {limit} character limit")]
    OverLimit { count: usize, limit: usize },

    #[error("Thread has no content")]
    Empty,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type ThreadResult<T> = Result<T, ThreadError>;
