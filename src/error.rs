//! Error kinds shared across the crate.
//!
//! Every engine validates its own inputs and fails before doing any work;
//! no partial results are ever returned for a single-pair call.

use std::str::Utf8Error;

use thiserror::Error;

/// Errors produced by the decode boundary and the batch dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raw bytes could not be interpreted as UTF-8 text.
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),

    /// The batch dispatcher was asked to run with zero workers.
    #[error("worker count must be at least 1")]
    InvalidConcurrency,

    /// The worker pool could not be constructed.
    #[error("failed to start worker pool: {0}")]
    Pool(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
