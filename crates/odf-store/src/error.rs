use thiserror::Error;

/// Load failures are hard errors: the caller gets no partial dataset and
/// the store caches nothing, so a retry attempts the load again.  Bad
/// *individual* rows inside a structurally readable payload are not
/// errors — they are skipped and counted on the returned dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
