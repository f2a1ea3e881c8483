use std::fs::{self, File};
use std::io;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Send log output to `path`; the terminal itself belongs to the UI.
pub fn init_logging(path: &Path, debug: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(path)?;
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
