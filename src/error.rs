use std::path::PathBuf;

use thiserror::Error;

/// Upload bytes that could not be taken in as a source document.
///
/// These are always the uploader's fault: nothing is converted and no partial
/// output is produced.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("upload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("upload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("upload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl IntakeError {
    /// HTTP status a hosting boundary should answer with
    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Failure of a whole bytes-in, bytes-out conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("failed to serialise converted export: {0}")]
    Serialize(serde_json::Error),
}

impl ConvertError {
    /// HTTP status a hosting boundary should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            ConvertError::Intake(e) => e.status_code(),
            ConvertError::Serialize(_) => 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
