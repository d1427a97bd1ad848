use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("{0}")]
    Message(String),
    #[error("preflight: {} not found; {hint}", .path.display())]
    MissingFile { path: PathBuf, hint: &'static str },
    #[error("{0}")]
    Config(ConfigError),
    #[error("credentials: {fields} must be set in {}", .path.display())]
    MissingCredentials { path: PathBuf, fields: String },
    #[error("credentials: write {}: {reason}", .path.display())]
    CredentialWrite { path: PathBuf, reason: String },
    #[error("upload {dir}: {reason}")]
    UploadFailed { dir: String, reason: String },
    #[error("upload {dir}: no blobref in output, got {output:?}")]
    MalformedResult { dir: String, output: String },
    #[error("result log {}: {source}", .path.display())]
    ResultLog { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, BackupError>;

impl BackupError {
    pub fn message(msg: impl Into<String>) -> Self {
        BackupError::Message(msg.into())
    }
}

impl From<ConfigError> for BackupError {
    fn from(err: ConfigError) -> Self {
        BackupError::Config(err)
    }
}
