//! Static quote file reader.
//!
//! The quotes resource is a JSON document whose schema this server does not
//! interpret. It is read from disk on every call and returned unchanged.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotesError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
pub struct QuoteReader {
    path: PathBuf,
}

impl QuoteReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file. Blocking.
    pub fn load(&self) -> Result<Value, QuotesError> {
        let display = self.path.display().to_string();
        let raw = std::fs::read_to_string(&self.path).map_err(|source| QuotesError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| QuotesError::Parse {
            path: display,
            source,
        })
    }
}
