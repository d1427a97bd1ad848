use std::path::PathBuf;

use clap::Parser;

use crate::cli::{DEFAULT_BINARY, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};
use crate::upload::DEFAULT_CONFIG_DIR_VAR;

#[derive(Parser, Debug)]
#[command(
    name = "backup-now",
    version,
    about = "Upload the directories listed in a config file through an external put tool"
)]
pub struct Cli {
    /// Credentials and directories to back up, one per line
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Upload tool; a bare name is looked up in the working directory
    #[arg(long, default_value = DEFAULT_BINARY)]
    pub binary: PathBuf,
    /// Where client-config.json is written (defaults to the working directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
    /// Environment variable that tells the upload tool where its config lives
    /// (camput reads CAMLI_CONFIG_DIR; pass CONFIG_DIR for tools using the generic name)
    #[arg(long, default_value = DEFAULT_CONFIG_DIR_VAR)]
    pub config_dir_var: String,
    /// Append-only result log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,
    /// Argument passed before each directory (repeatable, replaces "file")
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,
    /// Also pass -permanode
    #[arg(long)]
    pub permanode: bool,
    /// Log the tool's output as-is instead of requiring a sha1 blobref
    #[arg(long)]
    pub raw: bool,
    /// Prefix result log lines with the local time
    #[arg(long)]
    pub log_timestamps: bool,
    /// Validate everything and print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
