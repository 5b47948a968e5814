//! Command-line and environment configuration.
//!
//! # Responsibility
//! - Resolve database path, logging settings and write-through policy.
//!
//! # Invariants
//! - Flags win over environment variables; both win over defaults.
//! - The username is never blank and is used exactly as given.

use clap::Parser;
use gradebook_core::{default_log_level, WriteThroughPolicy};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "gradebook.sqlite3";
const LOG_DIR_NAME: &str = "gradebook-logs";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Record subject marks for a user and compute totals"
)]
pub struct CliConfig {
    /// User whose subjects are loaded and recorded.
    #[arg(value_parser = parse_username)]
    pub username: String,

    /// SQLite database file.
    #[arg(long = "db", env = "GRADEBOOK_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "GRADEBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "GRADEBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Keep records in the session even when the database write fails.
    #[arg(long)]
    pub legacy_write_through: bool,
}

impl CliConfig {
    pub fn db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    pub fn write_through_policy(&self) -> WriteThroughPolicy {
        if self.legacy_write_through {
            WriteThroughPolicy::Legacy
        } else {
            WriteThroughPolicy::Atomic
        }
    }
}

// Rows are scoped by the exact string, so surrounding spaces are kept.
fn parse_username(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("username cannot be blank".to_string());
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::CliConfig;
    use clap::Parser;
    use gradebook_core::WriteThroughPolicy;
    use std::path::PathBuf;

    #[test]
    fn flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "gradebook",
            "alice",
            "--db",
            "/data/marks.db",
            "--log-dir",
            "/var/log/gradebook",
            "--log-level",
            "warn",
            "--legacy-write-through",
        ])
        .unwrap();

        assert_eq!(config.username, "alice");
        assert_eq!(config.db_path(), PathBuf::from("/data/marks.db"));
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/gradebook"));
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.write_through_policy(), WriteThroughPolicy::Legacy);
    }

    #[test]
    fn atomic_policy_is_default() {
        let config = CliConfig::try_parse_from(["gradebook", "bob"]).unwrap();
        assert_eq!(config.write_through_policy(), WriteThroughPolicy::Atomic);
    }

    #[test]
    fn username_is_kept_verbatim() {
        let config = CliConfig::try_parse_from(["gradebook", " alice"]).unwrap();
        assert_eq!(config.username, " alice");
    }

    #[test]
    fn blank_username_is_rejected() {
        assert!(CliConfig::try_parse_from(["gradebook", "   "]).is_err());
        assert!(CliConfig::try_parse_from(["gradebook"]).is_err());
    }
}
