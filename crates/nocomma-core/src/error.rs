use thiserror::Error;

pub type Result<T> = std::result::Result<T, NcError>;

#[derive(Debug, Error)]
pub enum NcError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NcError {
    /// True when the reader of our output went away (`nocomma ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, NcError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
