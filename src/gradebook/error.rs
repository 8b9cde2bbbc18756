use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Cancelled.")]
    Cancelled,
}

impl GradebookError {
    /// Input and lookup failures abort the current command only; everything
    /// else is a fault in the environment and ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GradebookError::InvalidInput(_) | GradebookError::NotFound(_) | GradebookError::Cancelled
        )
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;
