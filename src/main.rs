use anyhow::{Context, Result};
use log::info;
use rusty_scorecard::args::{self, CleanArgs, Mode, StorageKind};
use rusty_scorecard::repl::{ReplState, run_repl};
use rusty_scorecard::storage::{JsonFileStorage, MemoryStorage, SqliteStorage, Storage};
use rusty_scorecard::view::text::{render_card, render_totals};
use std::fs;
use std::path::PathBuf;

const SQLITE_FILE: &str = "scorecard.db";

fn main() -> Result<()> {
    let args = args::load_config(args::args_checks())?;
    init_logging(&args);

    let storage = open_storage(&args)?;
    let mut state = ReplState::new(
        storage,
        args.history_limit,
        args.link.as_deref(),
        args.share_base_url.clone(),
    );
    info!("round restored from {}", state.restored_from);

    match args.mode {
        Mode::Repl => run_repl(&mut state),
        Mode::Show => {
            let snapshot = state.model.snapshot();
            println!("{}", render_card(snapshot, state.model.current_hole()));
            print!("{}", render_totals(snapshot));
            Ok(())
        }
    }
}

fn init_logging(args: &CleanArgs) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filter) = &args.log_level {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn open_storage(args: &CleanArgs) -> Result<Box<dyn Storage>> {
    let storage: Box<dyn Storage> = match args.storage {
        StorageKind::File => Box::new(
            JsonFileStorage::new(&args.storage_path)
                .with_context(|| format!("open storage dir {}", args.storage_path.display()))?,
        ),
        StorageKind::Sqlite => {
            let path = sqlite_path(&args.storage_path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            Box::new(
                SqliteStorage::open(&path)
                    .with_context(|| format!("open sqlite {}", path.display()))?,
            )
        }
        StorageKind::Memory => Box::new(MemoryStorage::new()),
    };
    Ok(storage)
}

/// A path without an extension is treated as a directory to hold the
/// database file.
fn sqlite_path(path: &std::path::Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.join(SQLITE_FILE)
    }
}
