use std::env;
use std::path::{Path, PathBuf};

use crate::error::{BackupError, Result};

pub fn current_dir() -> Result<PathBuf> {
    env::current_dir()
        .map_err(|e| BackupError::message(format!("get current working directory: {}", e)))
}

/// Relative paths are taken against `base`.
pub fn absolute_in(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// A bare program name means "next to the data files", not a `PATH` lookup.
pub fn resolve_binary(binary: &Path, working_dir: &Path) -> PathBuf {
    let bare = binary.components().count() == 1 && !binary.is_absolute();
    if bare {
        working_dir.join(binary)
    } else {
        binary.to_path_buf()
    }
}

pub fn check_config_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(BackupError::MissingFile {
            path: path.to_path_buf(),
            hint: "provide it with the user, password and server settings and the directories to back up, one per line",
        });
    }
    Ok(())
}

pub fn check_binary(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(BackupError::MissingFile {
            path: path.to_path_buf(),
            hint: "place the upload tool in the same directory as the config file or pass --binary",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bare_binary_resolves_in_working_dir() {
        let wd = Path::new("/srv/backup");
        assert_eq!(resolve_binary(Path::new("camput"), wd), PathBuf::from("/srv/backup/camput"));
        assert_eq!(resolve_binary(Path::new("./bin/camput"), wd), PathBuf::from("./bin/camput"));
        assert_eq!(resolve_binary(Path::new("/usr/bin/pk-put"), wd), PathBuf::from("/usr/bin/pk-put"));
    }

    #[test]
    fn missing_files_are_reported() {
        let dir = TempDir::new().expect("tempdir");
        let config = dir.path().join("config.txt");
        assert!(matches!(check_config_file(&config), Err(BackupError::MissingFile { .. })));
        std::fs::write(&config, "/data\n").expect("write");
        check_config_file(&config).expect("present");
        assert!(check_binary(dir.path()).is_err());
    }
}
