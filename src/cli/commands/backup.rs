use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::credentials::{generate_credentials, CREDENTIALS_FILE};
use crate::config::load::load_config;
use crate::config::model::CredentialsDocument;
use crate::error::Result;
use crate::types::{ResultMode, RunMode};
use crate::upload::log::ResultLog;
use crate::upload::{run_uploads, UploadSettings, UploadSummary};
use crate::util::paths::{absolute_in, check_binary, check_config_file, current_dir, resolve_binary};

#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub config: PathBuf,
    pub binary: PathBuf,
    pub config_dir: Option<PathBuf>,
    pub config_dir_var: String,
    pub log: PathBuf,
    pub args: Vec<String>,
    pub result_mode: ResultMode,
    pub log_timestamps: bool,
}

/// Preflight, parse, write credentials, then upload each directory in turn.
/// Any error ends the run at the stage that produced it.
pub fn run_backup_command(options: &BackupOptions, run_mode: RunMode) -> Result<UploadSummary> {
    let working_dir = current_dir()?;

    let config_path = absolute_in(&options.config, &working_dir);
    check_config_file(&config_path)?;
    let binary = resolve_binary(&options.binary, &working_dir);
    check_binary(&binary)?;

    let cfg = load_config(&config_path)?;
    debug!(
        "loaded config {} with {} director{}",
        config_path.display(),
        cfg.directories.len(),
        if cfg.directories.len() == 1 { "y" } else { "ies" }
    );
    if cfg.directories.is_empty() {
        warn!("no directories listed in {}", config_path.display());
    }

    let config_dir = match &options.config_dir {
        Some(dir) => absolute_in(dir, &working_dir),
        None => working_dir.clone(),
    };
    let credentials_path = config_dir.join(CREDENTIALS_FILE);
    if run_mode.dry_run {
        CredentialsDocument::from_config(&cfg, &config_path)?;
        println!("dry-run: would write {}", credentials_path.display());
    } else {
        generate_credentials(&cfg, &config_path, &credentials_path)?;
        debug!("wrote {}", credentials_path.display());
    }

    let mut log = if run_mode.dry_run {
        None
    } else {
        Some(ResultLog::open(
            &absolute_in(&options.log, &working_dir),
            options.log_timestamps,
        )?)
    };

    let settings = UploadSettings {
        binary,
        args: options.args.clone(),
        config_dir_var: options.config_dir_var.clone(),
        config_dir,
        result_mode: options.result_mode,
    };
    debug!("result mode {}", settings.result_mode.as_str());
    let summary = run_uploads(&cfg, &settings, log.as_mut(), run_mode)?;

    if let Some(log) = &log {
        debug!("recorded {} result(s) in {}", summary.uploaded.len(), log.path().display());
    }
    if run_mode.dry_run {
        info!("dry run complete");
    } else {
        info!("upload successful");
    }
    Ok(summary)
}
