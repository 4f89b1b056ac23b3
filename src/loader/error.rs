// Thu Aug 06 2026 - Alex

use crate::signature::SignatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building class information from bytes on disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Not a class file (bad magic)")]
    BadMagic,
    #[error("Truncated class file at offset {0}")]
    Truncated(usize),
    #[error("Malformed class file: {0}")]
    Malformed(String),
    #[error("Bad constant pool index {0}")]
    BadConstantIndex(u16),
    #[error("Invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),
    #[error("Unsupported input <{0}>: expected a jar, a class file or a directory")]
    UnsupportedInput(PathBuf),
    #[error("Archive error in <{path}>: {message}")]
    Archive { path: PathBuf, message: String },
    #[error("Error in archive entry <{entry}>: {source}")]
    Entry {
        entry: String,
        #[source]
        source: Box<LoadError>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
