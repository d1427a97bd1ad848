use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::model::BackupConfig;
use crate::error::Result;
use crate::types::{ResultMode, RunMode};

pub mod log;
pub mod put;
pub mod result;

use self::log::ResultLog;
use self::put::{run_upload, UploadCommand};
use self::result::extract_result;

pub const DEFAULT_ARGS: &[&str] = &["file"];
pub const PERMANODE_ARG: &str = "-permanode";
pub const DEFAULT_CONFIG_DIR_VAR: &str = "CAMLI_CONFIG_DIR";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub binary: PathBuf,
    /// Passed before the directory on every invocation.
    pub args: Vec<String>,
    pub config_dir_var: String,
    pub config_dir: PathBuf,
    pub result_mode: ResultMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: Vec<(String, String)>,
}

/// Uploads every directory in config order. The first failure aborts the run;
/// nothing is recorded for the failing directory or any after it.
pub fn run_uploads(
    cfg: &BackupConfig,
    settings: &UploadSettings,
    mut log: Option<&mut ResultLog>,
    run_mode: RunMode,
) -> Result<UploadSummary> {
    let mut summary = UploadSummary::default();
    let total = cfg.directories.len();
    for (idx, dir) in cfg.directories.iter().enumerate() {
        debug!("upload {}/{}: {}", idx + 1, total, dir);
        let output = run_upload(
            UploadCommand {
                binary: &settings.binary,
                args: &settings.args,
                directory: dir,
                env_var: &settings.config_dir_var,
                config_dir: &settings.config_dir,
            },
            run_mode,
        )?;
        if run_mode.dry_run {
            continue;
        }
        let value = extract_result(dir, &output, settings.result_mode)?;
        if let Some(log) = log.as_deref_mut() {
            log.append(dir, &value)?;
        }
        info!("{}: {}", dir, value);
        summary.uploaded.push((dir.clone(), value));
    }
    Ok(summary)
}
