use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::PieceWeights;

pub const DEFAULT_WEIGHTS_FILE: &str = "chess_weights.json";

#[derive(Debug, thiserror::Error)]
pub enum WeightStoreError {
    #[error("weights file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to access weights file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persists [`PieceWeights`] as JSON.
///
/// A missing file is not an error: `load` falls back to the defaults.
/// A file that exists but cannot be parsed is reported as `Corrupt`.
#[derive(Debug, Clone)]
pub struct WeightStore {
    path: PathBuf,
}

impl Default for WeightStore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS_FILE)
    }
}

impl WeightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PieceWeights, WeightStoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No weights at {}, using defaults",
                    self.path.display()
                );
                return Ok(PieceWeights::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let weights = serde_json::from_slice(&bytes).map_err(|source| WeightStoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Loaded weights from {}: {:?}", self.path.display(), weights);

        Ok(weights)
    }

    /// Writes to a temporary file next to the target and renames it into
    /// place, so the target is either the old or the new table, never partial.
    pub fn save(&self, weights: &PieceWeights) -> Result<(), WeightStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        serde_json::to_writer_pretty(&mut file, weights)
            .map_err(io::Error::from)
            .and_then(|_| file.flush())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        log::debug!("Saved weights to {}: {:?}", self.path.display(), weights);
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> WeightStoreError {
        WeightStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
