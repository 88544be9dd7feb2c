use std::io::{self, IsTerminal};
use std::path::PathBuf;

use attackr_common::config::{Config, DEFAULT_LOG_PATH};
use attackr_common::models::threshold::Threshold;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "attackr")]
#[command(version, about = "Report the addresses behind repeated failed password logins.")]
pub struct CommandLine {
    /// Syslog or auth log to scan
    #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
    pub file: PathBuf,

    /// Minimum number of failed attempts to include
    #[arg(short, long, default_value_t = Threshold::DEFAULT, allow_negative_numbers = true)]
    pub threshold: Threshold,

    /// GeoLite2 country or city database used to resolve countries
    #[arg(long, env = "ATTACKR_GEOIP_DB")]
    pub geoip_db: Option<PathBuf>,

    /// Resolve countries in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Keep the terminal contents instead of clearing it first
    #[arg(long)]
    pub no_clear: bool,

    /// Hide status messages
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// Show more detail (-vv for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            log_path: self.file,
            threshold: self.threshold,
            geoip_db: self.geoip_db,
            parallel_lookups: self.parallel,
            clear_screen: !self.no_clear && io::stdout().is_terminal(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
