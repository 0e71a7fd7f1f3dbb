use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::controller::share::DEFAULT_SHARE_BASE_URL;
use crate::mvu::history::DEFAULT_HISTORY_LIMIT;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, Mode, StorageKind};
use types::FileConfig;

pub const DEFAULT_STORAGE_PATH: &str = ".scorecard";

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

/// Merge CLI values with an optional TOML file and built-in defaults.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if a
/// value taken from it fails validation.
pub fn load_config(args: Args) -> Result<CleanArgs> {
    let file_config = match args.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let share_base_url = match args.share_base_url.or(file_config.share_base_url) {
        Some(url) => validation::check_base_url(&url).map_err(|e| anyhow!(e))?,
        None => DEFAULT_SHARE_BASE_URL.to_string(),
    };

    let history_limit = args
        .history_limit
        .or(file_config.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT);
    if history_limit == 0 {
        return Err(anyhow!("history_limit must be at least 1"));
    }

    Ok(CleanArgs {
        mode: args.mode.or(file_config.mode).unwrap_or(Mode::Repl),
        storage: args
            .storage
            .or(file_config.storage)
            .unwrap_or(StorageKind::File),
        storage_path: args
            .storage_path
            .or(file_config.storage_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH)),
        history_limit,
        share_base_url,
        link: args.link.or(file_config.link),
        log_level: args.log_level.or(file_config.log_level),
    })
}
