use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagicSquareError {
    #[error("invalid size {size}: {reason}")]
    InvalidSize { size: usize, reason: &'static str },

    #[error("no construction available for {size}x{size} magic squares")]
    UnsupportedConstruction { size: usize },

    #[error("could not allocate cells for a {size}x{size} square")]
    AllocationFailed { size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MagicSquareError>;

impl MagicSquareError {
    pub(crate) fn invalid_size(size: usize, reason: &'static str) -> Self {
        Self::InvalidSize { size, reason }
    }
}
