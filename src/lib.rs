pub mod cli;
pub mod config;
pub mod error;
pub mod types;
pub mod upload;
pub mod util;

pub use config::model::{BackupConfig, CredentialsDocument};
pub use error::{BackupError, ConfigError, Result};
pub use types::{BlobRef, ResultMode, RunMode};
