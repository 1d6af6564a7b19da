//! Loading the content file from disk.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::lint::lint;
use crate::model::ContentDocument;
use crate::validate::validate;
use crate::violation::ContentValidationError;

/// Errors that can occur while loading the content document.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content file {path} is invalid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ContentValidationError,
    },
}

impl ContentLoadError {
    /// The validation failure, when the file parsed but broke the contract.
    pub fn validation(&self) -> Option<&ContentValidationError> {
        match self {
            ContentLoadError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read, parse and validate the content document at `path`.
///
/// Lints are logged as warnings; only violations fail the load.
pub fn load_content(path: &Path) -> Result<ContentDocument, ContentLoadError> {
    debug!(path = %path.display(), "Reading content document");
    let text = std::fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| ContentLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let document = validate(&raw).map_err(|source| ContentLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    for warning in lint(&document) {
        warn!(path = %path.display(), "{}", warning);
    }
    info!(
        path = %path.display(),
        sections = document.section_anchors().len(),
        "Content document validated"
    );
    Ok(document)
}
