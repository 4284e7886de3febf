//! Error taxonomy for a meal plan run.
//!
//! Storage and configuration errors are recoverable: callers log them and
//! carry on. Transport and parse errors end the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    StorageIo(#[from] std::io::Error),

    #[error("invalid meal: {0}")]
    InvalidMeal(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("model response is not a valid meal plan: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        /// Text exactly as the model returned it.
        raw: String,
        /// Text after reasoning and fence removal.
        cleaned: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl PlanError {
    /// Whether this error ends a plan run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Parse { .. })
    }
}

impl From<reqwest::Error> for PlanError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
