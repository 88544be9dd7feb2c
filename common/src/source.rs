use crate::error::LogSourceError;

/// Supplies the raw log content, one entry per line.
pub trait LineSource {
    /// Human readable origin, used in log output.
    fn describe(&self) -> String;

    fn read_lines(&self) -> Result<Vec<String>, LogSourceError>;
}

impl LineSource for Vec<String> {
    fn describe(&self) -> String {
        format!("{} in-memory lines", self.len())
    }

    fn read_lines(&self) -> Result<Vec<String>, LogSourceError> {
        Ok(self.clone())
    }
}
