use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::config::model::{BackupConfig, Directive};
use crate::error::{ConfigError, Result};

/// Marker line after which every non-empty line is a directory path.
pub const DIRECTORIES_SECTION: &str = "[directories]";

pub fn load_config(path: &Path) -> Result<BackupConfig> {
    let mut contents = String::new();
    File::open(path)
        .map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?
        .read_to_string(&mut contents)
        .map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(parse_config(&contents, path))
}

pub fn parse_config(contents: &str, source: &Path) -> BackupConfig {
    let mut cfg = BackupConfig::default();
    let mut in_directories = false;
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if in_directories {
            cfg.directories.push(line.to_string());
            continue;
        }
        if line.trim().eq_ignore_ascii_case(DIRECTORIES_SECTION) {
            in_directories = true;
            continue;
        }
        match parse_directive(line) {
            Some((directive, value)) => {
                let slot = match directive {
                    Directive::User => &mut cfg.user,
                    Directive::Password => &mut cfg.password,
                    Directive::Server => &mut cfg.server,
                };
                if !slot.is_empty() {
                    warn!(
                        "{}:{}: {} set more than once; using the later value",
                        source.display(),
                        idx + 1,
                        directive.as_str()
                    );
                }
                *slot = value.to_string();
            }
            None => cfg.directories.push(line.to_string()),
        }
    }
    cfg
}

/// Splits `key = value` when the key, with whitespace removed and ignoring
/// case, names a credential directive.
fn parse_directive(line: &str) -> Option<(Directive, &str)> {
    let (key, value) = line.split_once('=')?;
    let key: String = key
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    Directive::parse(&key).map(|d| (d, value.trim()))
}
