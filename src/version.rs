//! Resolves the version label interpolated into the document title.

use crate::error::ConvertError;
use std::fs;
use std::path::PathBuf;

/// File consulted when no version is passed on the command line.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Where the version label comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// A label given verbatim.
    Explicit(String),
    /// A file whose first line, trimmed, is the label.
    File(PathBuf),
}

impl VersionSource {
    /// Prefers an explicit label and falls back to `version_file`.
    pub fn from_args(explicit: Option<String>, version_file: PathBuf) -> Self {
        match explicit {
            Some(label) => Self::Explicit(label),
            None => Self::File(version_file),
        }
    }

    /// Produces the label. Reading happens here, once, so callers can resolve
    /// before doing any other work.
    pub fn resolve(&self) -> Result<String, ConvertError> {
        match self {
            Self::Explicit(label) => Ok(label.clone()),
            Self::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| {
                    ConvertError::ReadVersion {
                        path: path.clone(),
                        source,
                    }
                })?;
                let label = content.lines().next().unwrap_or_default().trim();
                if label.is_empty() {
                    log::warn!("Version file {} is empty", path.display());
                }
                Ok(label.to_string())
            }
        }
    }
}
