use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("GitHub token is required")]
    MissingToken,

    #[error("invalid GitHub token")]
    InvalidToken,

    #[error("invalid repository URL: {0}")]
    InvalidRepository(String),

    #[error("GitHub API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to reach GitHub: {0}")]
    Transport(Box<ureq::Error>),
}

pub type ExportResult<T> = Result<T, ExportError>;
