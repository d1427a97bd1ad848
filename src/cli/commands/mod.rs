pub mod backup;

use crate::error::BackupError;

pub fn exit_for_error(err: &BackupError) -> ! {
    eprintln!("backup-now: {}", err);
    std::process::exit(1);
}
