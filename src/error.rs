use thiserror::Error;

/// Precondition failures of the carousel component and its configuration.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    EmptyImages,

    #[error("first image index {index} is out of bounds for {len} images")]
    FirstIndexOutOfBounds { index: usize, len: usize },

    #[error("image index {index} is out of bounds for {len} images")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("images duration must be a positive number of milliseconds")]
    ZeroDuration,

    #[error("unsupported transition duration {0}ms (expected one of 75, 100, 150, 200, 300, 500, 700, 1000)")]
    InvalidTransitionDuration(u16),

    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
