// Runtime configuration. Nothing is read from the environment: the
// database sits in the working directory and logs go to the user's local
// data directory.

use std::path::PathBuf;

use crate::store::DEFAULT_DATABASE_FILE;

const APP_DIR: &str = "catalog-cli";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    /// Config pointing at a specific database file, with default logging.
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Config {
            database_path: path.into(),
            log_dir: default_log_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::with_database(DEFAULT_DATABASE_FILE)
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
