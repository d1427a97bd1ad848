use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{BackupError, Result};

pub const RESULT_LOG_FILE: &str = "log.txt";

/// Append-only record of `<directory>: <blobref>` lines kept across runs.
/// The file handle is closed when this is dropped.
pub struct ResultLog {
    path: PathBuf,
    file: File,
    timestamps: bool,
}

impl ResultLog {
    pub fn open(path: &Path, timestamps: bool) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = options.open(path).map_err(|e| BackupError::ResultLog {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            timestamps,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, dir: &str, value: &str) -> Result<()> {
        let line = if self.timestamps {
            format!("{} {}: {}\n", Local::now().format("%Y/%m/%d %H:%M:%S"), dir, value)
        } else {
            format!("{}: {}\n", dir, value)
        };
        self.file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| BackupError::ResultLog {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_across_opens() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(RESULT_LOG_FILE);
        {
            let mut log = ResultLog::open(&path, false).expect("open");
            log.append("/data", "sha1-abc").expect("append");
        }
        {
            let mut log = ResultLog::open(&path, false).expect("reopen");
            log.append("/data", "sha1-abc").expect("append");
        }
        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "/data: sha1-abc\n/data: sha1-abc\n");
    }

    #[test]
    fn timestamped_lines_keep_entry_suffix() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(RESULT_LOG_FILE);
        let mut log = ResultLog::open(&path, true).expect("open");
        log.append("/data", "sha1-abc").expect("append");
        let contents = std::fs::read_to_string(&path).expect("read");
        // "YYYY/MM/DD HH:MM:SS " prefix
        assert_eq!(contents.len(), 20 + "/data: sha1-abc\n".len());
        assert!(contents.ends_with(" /data: sha1-abc\n"));
    }
}
