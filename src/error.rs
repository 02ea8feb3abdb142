// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translation(TranslationError),
}

/// Reasons a translation resource could not be installed.
///
/// All of them are recovered at startup: the application falls back to its
/// source-language text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No file exists at any of the candidate paths.
    NotFound(PathBuf),

    /// The file exists but could not be read.
    Unreadable { path: PathBuf, reason: String },

    /// The file bytes are not valid for the configured translation codec.
    Encoding { path: PathBuf, reason: String },

    /// The file is not a usable Fluent document.
    Malformed { path: PathBuf, reason: String },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::NotFound(path) => {
                write!(f, "Translation not found: {}", path.display())
            }
            TranslationError::Unreadable { path, reason } => {
                write!(f, "Cannot read {}: {}", path.display(), reason)
            }
            TranslationError::Encoding { path, reason } => {
                write!(f, "Cannot decode {}: {}", path.display(), reason)
            }
            TranslationError::Malformed { path, reason } => {
                write!(f, "Malformed translation {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for TranslationError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation(e) => write!(f, "Translation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TranslationError> for Error {
    fn from(err: TranslationError) -> Self {
        Error::Translation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
