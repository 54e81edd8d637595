use readme_gen_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// A required field was missing or blank at the core boundary. Only
    /// reachable when upstream validation was bypassed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A section builder failed. Carries the original cause so the outer
    /// layer can map every builder failure to one uniform response.
    #[error("failed to generate README: {source}")]
    Generation {
        #[from]
        source: FormatError,
    },
}

pub type ComposeResult<T> = Result<T, ComposeError>;
