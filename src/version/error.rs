// Tue Aug 04 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("<{0}> does not match the version format")]
    InvalidFormat(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
