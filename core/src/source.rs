use std::fs;
use std::path::PathBuf;

use attackr_common::error::LogSourceError;
use attackr_common::source::LineSource;
use tracing::debug;

/// Reads a log file from disk in one go.
///
/// Undecodable byte sequences are replaced rather than rejected, so a log
/// with stray binary content still yields every line.
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileLineSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>, LogSourceError> {
        let bytes: Vec<u8> =
            fs::read(&self.path).map_err(|err| LogSourceError::from_io(&self.path, err))?;
        debug!("read {} bytes from {}", bytes.len(), self.path.display());

        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_owned).collect())
    }
}
