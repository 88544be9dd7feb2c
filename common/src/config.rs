use std::path::PathBuf;

use crate::models::threshold::Threshold;

pub const DEFAULT_LOG_PATH: &str = "/home/student/syslog.log";

#[derive(Debug, Clone)]
pub struct Config {
    /// Log file scanned for failed password events.
    pub log_path: PathBuf,
    pub threshold: Threshold,
    /// GeoLite2 country or city database.
    ///
    /// `None` runs the report with every country shown as unavailable.
    pub geoip_db: Option<PathBuf>,
    /// Resolve countries on the rayon pool instead of one by one.
    pub parallel_lookups: bool,
    pub clear_screen: bool,
    pub quiet: u8,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            threshold: Threshold::default(),
            geoip_db: None,
            parallel_lookups: false,
            clear_screen: true,
            quiet: 0,
            verbose: 0,
        }
    }
}
