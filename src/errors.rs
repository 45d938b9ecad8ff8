use std::fs;
use std::io;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Failures that abort a run before any property is checked
#[derive(Debug, Error)]
pub enum PropsError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for loading properties and rules
pub type PropsResult<T> = Result<T, PropsError>;

impl PropsError {
    /// Process exit status reported for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Read a whole document, telling a missing file apart from other I/O failures
pub(crate) fn read_document(path: &Path) -> PropsResult<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PropsError::FileNotFound(path.to_path_buf())
        } else {
            PropsError::Io { path: path.to_path_buf(), source: e }
        }
    })
}
