use rusty_scorecard::args::{Args, DEFAULT_STORAGE_PATH, Mode, StorageKind, load_config};
use std::path::PathBuf;

#[test]
fn defaults_without_file() {
    let clean = load_config(Args::default()).unwrap();
    assert_eq!(clean.mode, Mode::Repl);
    assert_eq!(clean.storage, StorageKind::File);
    assert_eq!(clean.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
    assert_eq!(clean.history_limit, 200);
    assert_eq!(clean.share_base_url, "https://scorecard.local/");
    assert!(clean.link.is_none());
}

#[test]
fn cli_wins_over_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scorecard.toml");
    std::fs::write(
        &path,
        r#"
mode = "show"
storage = "sqlite"
storage_path = "/tmp/cards.db"
history_limit = 10
share_base_url = "https://golf.example/card"
log_level = "debug"
"#,
    )?;

    let args = Args {
        config_toml: Some(path),
        history_limit: Some(25),
        ..Default::default()
    };
    let clean = load_config(args)?;
    assert_eq!(clean.mode, Mode::Show);
    assert_eq!(clean.storage, StorageKind::Sqlite);
    assert_eq!(clean.storage_path, PathBuf::from("/tmp/cards.db"));
    assert_eq!(clean.history_limit, 25);
    assert_eq!(clean.share_base_url, "https://golf.example/card");
    assert_eq!(clean.log_level.as_deref(), Some("debug"));
    Ok(())
}

#[test]
fn bad_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let zero = Args {
        history_limit: Some(0),
        ..Default::default()
    };
    assert!(load_config(zero).is_err());

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "share_base_url = \"ftp://nope\"\n")?;
    let args = Args {
        config_toml: Some(path),
        ..Default::default()
    };
    assert!(load_config(args).is_err());

    let unparsable = dir.path().join("broken.toml");
    std::fs::write(&unparsable, "storage = [")?;
    let args = Args {
        config_toml: Some(unparsable),
        ..Default::default()
    };
    assert!(load_config(args).is_err());
    Ok(())
}
