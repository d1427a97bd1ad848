use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::model::{BackupConfig, CredentialsDocument};
use crate::error::{BackupError, Result};

pub const CREDENTIALS_FILE: &str = "client-config.json";

impl CredentialsDocument {
    /// Fails without touching the filesystem when any credential is unset.
    pub fn from_config(cfg: &BackupConfig, source: &Path) -> Result<Self> {
        let missing: Vec<&str> = [
            ("user", &cfg.user),
            ("password", &cfg.password),
            ("server", &cfg.server),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
        if !missing.is_empty() {
            return Err(BackupError::MissingCredentials {
                path: source.to_path_buf(),
                fields: missing.join(", "),
            });
        }
        Ok(CredentialsDocument {
            auth: format!("userpass:{}:{}", cfg.user, cfg.password),
            server: cfg.server.clone(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let mut data = serde_json::to_string(self)
            .map_err(|e| BackupError::message(format!("credentials: encode: {}", e)))?;
        data.push('\n');
        Ok(data)
    }
}

/// Always truncates, so edited credentials take effect on the next run.
pub fn write_credentials(path: &Path, doc: &CredentialsDocument) -> Result<()> {
    let data = doc.to_json()?;
    let write_err = |e: std::io::Error| BackupError::CredentialWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(data.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}

pub fn generate_credentials(
    cfg: &BackupConfig,
    source: &Path,
    path: &Path,
) -> Result<CredentialsDocument> {
    let doc = CredentialsDocument::from_config(cfg, source)?;
    write_credentials(path, &doc)?;
    Ok(doc)
}
