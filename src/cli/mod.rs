use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::Cli;
use crate::cli::commands::{backup, exit_for_error};
use crate::types::{ResultMode, RunMode};
use crate::upload::{DEFAULT_ARGS, PERMANODE_ARG};

pub const DEFAULT_CONFIG_FILE: &str = "config.txt";
pub const DEFAULT_LOG_FILE: &str = "log.txt";
pub const DEFAULT_BINARY: &str = if cfg!(windows) { "camput.exe" } else { "camput" };

pub mod args;
pub mod commands;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let run_mode = RunMode {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };
    let options = backup::BackupOptions {
        config: cli.config,
        binary: cli.binary,
        config_dir: cli.config_dir,
        config_dir_var: cli.config_dir_var,
        log: cli.log,
        args: upload_args(&cli.args, cli.permanode),
        result_mode: if cli.raw {
            ResultMode::Raw
        } else {
            ResultMode::Strict
        },
        log_timestamps: cli.log_timestamps,
    };
    if let Err(err) = backup::run_backup_command(&options, run_mode) {
        exit_for_error(&err);
    }
    Ok(())
}

fn upload_args(explicit: &[String], permanode: bool) -> Vec<String> {
    let mut args: Vec<String> = if explicit.is_empty() {
        DEFAULT_ARGS.iter().map(|a| a.to_string()).collect()
    } else {
        explicit.to_vec()
    };
    if permanode && !args.iter().any(|a| a == PERMANODE_ARG) {
        args.push(PERMANODE_ARG.to_string());
    }
    args
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            eprintln!("{}", err);
            std::process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
