//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FlowError` via `From` impls, or keep them separate and wrap `FlowError`
//! as one variant.  Data-quality problems on individual trip records are
//! never errors — they are skipped and counted at the site that sees them.

use thiserror::Error;

/// The top-level error type for `odf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `odf-*` crates.
pub type FlowResult<T> = Result<T, FlowError>;
