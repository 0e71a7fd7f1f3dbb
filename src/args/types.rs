use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// One JSON file per key in a directory.
    File,
    /// Key/value table in a SQLite file.
    Sqlite,
    /// Nothing survives the process.
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Interactive scorecard.
    Repl,
    /// Print the restored card and totals, then exit.
    Show,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Golf scorecard with net and Stableford scoring", long_about = None)]
pub struct Args {
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Optional TOML file; command-line values take precedence.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    #[arg(long, value_enum, value_name = "STORAGE")]
    pub storage: Option<StorageKind>,
    /// Directory for `file` storage, database file for `sqlite`.
    #[arg(long, value_name = "STORAGE_PATH")]
    pub storage_path: Option<PathBuf>,
    #[arg(long, value_name = "HISTORY_LIMIT")]
    pub history_limit: Option<usize>,
    #[arg(long, value_name = "SHARE_BASE_URL", value_parser = crate::args::validation::check_base_url)]
    pub share_base_url: Option<String>,
    /// Shared link (or bare code) to start from instead of the saved round.
    #[arg(long, value_name = "LINK")]
    pub link: Option<String>,
    /// `env_logger` filter, e.g. `info` or `rusty_scorecard=debug`.
    #[arg(long, value_name = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub(crate) mode: Option<Mode>,
    pub(crate) storage: Option<StorageKind>,
    pub(crate) storage_path: Option<PathBuf>,
    pub(crate) history_limit: Option<usize>,
    pub(crate) share_base_url: Option<String>,
    pub(crate) link: Option<String>,
    pub(crate) log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub mode: Mode,
    pub storage: StorageKind,
    pub storage_path: PathBuf,
    pub history_limit: usize,
    pub share_base_url: String,
    pub link: Option<String>,
    pub log_level: Option<String>,
}
