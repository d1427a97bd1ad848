use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{BackupError, Result};
use crate::types::RunMode;
use crate::util::command::{format_command, maybe_print_command, run_captured};

pub struct UploadCommand<'a> {
    pub binary: &'a Path,
    pub args: &'a [String],
    pub directory: &'a str,
    pub env_var: &'a str,
    pub config_dir: &'a Path,
}

impl<'a> From<UploadCommand<'a>> for Command {
    fn from(c: UploadCommand) -> Self {
        let mut cmd = Command::new(c.binary);
        cmd.args(c.args)
            .arg(c.directory)
            .env(c.env_var, c.config_dir);
        cmd
    }
}

/// Returns the tool's stdout. Dry runs print the command and return nothing.
pub fn run_upload(command: UploadCommand<'_>, run_mode: RunMode) -> Result<Vec<u8>> {
    let dir = command.directory.to_string();
    let mut cmd: Command = command.into();
    if run_mode.dry_run {
        maybe_print_command(&cmd, run_mode);
        return Ok(Vec::new());
    }
    info!("now running {}", format_command(&cmd));
    maybe_print_command(&cmd, run_mode);
    let output = run_captured(&mut cmd).map_err(|e| BackupError::UploadFailed {
        dir: dir.clone(),
        reason: format!("{}: {}", cmd.get_program().to_string_lossy(), e),
    })?;
    if !output.status.success() {
        return Err(BackupError::UploadFailed {
            dir,
            reason: format!(
                "{} failed ({})",
                cmd.get_program().to_string_lossy(),
                output.status
            ),
        });
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    #[test]
    fn command_appends_directory_and_config_env() {
        let binary = PathBuf::from("/srv/backup/camput");
        let args = vec!["file".to_string(), "-permanode".to_string()];
        let config_dir = PathBuf::from("/srv/backup");
        let cmd: Command = UploadCommand {
            binary: &binary,
            args: &args,
            directory: "/home/me/My Photos",
            env_var: "CAMLI_CONFIG_DIR",
            config_dir: &config_dir,
        }
        .into();
        assert_eq!(cmd.get_program(), OsStr::new("/srv/backup/camput"));
        let got: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(got, vec!["file", "-permanode", "/home/me/My Photos"]);
        let env: Vec<_> = cmd.get_envs().collect();
        assert_eq!(
            env,
            vec![(OsStr::new("CAMLI_CONFIG_DIR"), Some(OsStr::new("/srv/backup")))]
        );
    }

    #[test]
    fn dry_run_does_not_spawn() {
        let binary = PathBuf::from("/nonexistent/camput");
        let config_dir = PathBuf::from("/tmp");
        let out = run_upload(
            UploadCommand {
                binary: &binary,
                args: &["file".to_string()],
                directory: "/data",
                env_var: "CAMLI_CONFIG_DIR",
                config_dir: &config_dir,
            },
            RunMode {
                dry_run: true,
                verbose: false,
            },
        )
        .expect("dry run");
        assert!(out.is_empty());
    }

    #[test]
    fn launch_failure_is_upload_error() {
        let binary = PathBuf::from("/nonexistent/camput");
        let config_dir = PathBuf::from("/tmp");
        let err = run_upload(
            UploadCommand {
                binary: &binary,
                args: &["file".to_string()],
                directory: "/data",
                env_var: "CAMLI_CONFIG_DIR",
                config_dir: &config_dir,
            },
            RunMode::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BackupError::UploadFailed { ref dir, .. } if dir == "/data"));
    }
}
