// Tue Aug 04 2026 - Alex

use thiserror::Error;

/// Failure while emitting diff events to a handler.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Diff handler failed: {0}")]
    Sink(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
