// Thu Aug 06 2026 - Alex

use crate::delta::{Delta, DeltaAccumulator};
use crate::diff::{ClassDiffer, DiffError, StandardPolicy};
use crate::loader::{load_classes, LoadError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("<{0}> is not a valid jar, class file or class directory")]
    InvalidInput(PathBuf),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// End-to-end comparison of two compiled artifacts: loads both sides,
/// runs one diff pass with the standard policy and accumulates the
/// differences into a [`Delta`].
pub struct Checker {
    previous: PathBuf,
    current: PathBuf,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl Checker {
    pub fn new<P: AsRef<Path>>(previous: P, current: P) -> Self {
        Self {
            previous: previous.as_ref().to_path_buf(),
            current: current.as_ref().to_path_buf(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn diff(&self) -> Result<Delta, CheckError> {
        for path in [&self.previous, &self.current] {
            if !path.exists() {
                return Err(CheckError::InvalidInput(path.clone()));
            }
        }

        let previous = load_classes(&self.previous)?;
        let current = load_classes(&self.current)?;

        let mut accumulator = DeltaAccumulator::with_filters(&self.includes, &self.excludes);
        ClassDiffer::new(&StandardPolicy).diff(
            &mut accumulator,
            &label(&self.previous),
            &label(&self.current),
            &previous,
            &current,
        )?;
        Ok(accumulator.into_delta())
    }
}

fn label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
