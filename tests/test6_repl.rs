mod common;

use common::at;
use rusty_scorecard::controller::session::RestoreSource;
use rusty_scorecard::repl::{ReplOutcome, ReplState, execute_line};
use rusty_scorecard::storage::{MemoryStorage, STORAGE_KEY, Storage};

fn new_state() -> ReplState {
    ReplState::new(Box::new(MemoryStorage::new()), 50, None, "https://x.test/")
}

fn run(state: &mut ReplState, line: &str) -> String {
    run_at(state, line, 0)
}

fn run_at(state: &mut ReplState, line: &str, secs: i64) -> String {
    match execute_line(state, line, at(secs)) {
        ReplOutcome::Continue(output) => output,
        ReplOutcome::Exit => panic!("unexpected exit on {line:?}"),
    }
}

#[test]
fn scoring_session() {
    let mut state = new_state();
    assert_eq!(state.restored_from, RestoreSource::Defaults);

    assert_eq!(run(&mut state, "players 3"), "3 players");
    assert_eq!(run(&mut state, "name 1 \"Ann Lee\""), "player 1 is Ann Lee");
    assert_eq!(run(&mut state, "score 1 1 5"), "Ann Lee hole 1: 5");
    assert_eq!(run(&mut state, "hole next"), "hole 2");
    assert_eq!(run(&mut state, "s 1 4"), "Ann Lee hole 2: 4");
    assert_eq!(state.model.snapshot().players[0].scores[1], 4);

    assert_eq!(run(&mut state, "undo"), "undone");
    assert_eq!(state.model.snapshot().players[0].scores[1], 0);
    assert_eq!(run(&mut state, "redo"), "redone");
    assert_eq!(state.model.snapshot().players[0].scores[1], 4);
    assert_eq!(run(&mut state, "redo"), "Nothing to redo.");

    assert_eq!(run(&mut state, "stableford on"), "Stableford on");
    let totals = run(&mut state, "totals");
    assert!(totals.contains("Pts"));
    assert!(totals.contains("Ann Lee"));

    let saved = state.storage.load(STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("Ann Lee"));
}

#[test]
fn range_errors_and_usage() {
    let mut state = new_state();
    assert_eq!(run(&mut state, "score 5 1 4"), "Player must be between 1 and 2.");
    assert_eq!(run(&mut state, "par 0 4"), "Hole must be between 1 and 18.");
    assert_eq!(run(&mut state, "hole 30"), "hole 18");
    assert_eq!(run(&mut state, "hcp 2 12.4"), "Player 2 handicap 12");
    assert_eq!(run(&mut state, "par 1 9"), "hole 1 par 6");
    assert!(!run(&mut state, "players").is_empty());
    assert_eq!(run(&mut state, "undo"), "undone");
    assert_eq!(state.model.snapshot().pars[0], 4);
}

#[test]
fn unknown_and_malformed_input() {
    let mut state = new_state();
    assert!(run(&mut state, "bogus 1").starts_with("Unknown command: bogus"));
    let before = state.model.snapshot().clone();
    assert!(run(&mut state, "name 1 \"Ann").starts_with("Invalid character"));
    assert_eq!(state.model.snapshot(), &before);
    assert_eq!(run(&mut state, ""), "");
}

#[test]
fn exit_and_quit() {
    let mut state = new_state();
    assert_eq!(execute_line(&mut state, "exit", at(0)), ReplOutcome::Exit);
    assert_eq!(execute_line(&mut state, "q", at(0)), ReplOutcome::Exit);
}

#[test]
fn share_prints_link() {
    let mut state = new_state();
    run(&mut state, "course \"Old Course\"");
    let link = run(&mut state, "share");
    assert!(link.starts_with("https://x.test/?s="));

    let restored = ReplState::new(Box::new(MemoryStorage::new()), 50, Some(link.as_str()), "https://x.test/");
    assert_eq!(restored.restored_from, RestoreSource::Link);
    assert_eq!(restored.model.snapshot().course, "Old Course");
}

#[test]
fn pace_timer_follows_holes() {
    let mut state = new_state();
    assert_eq!(run_at(&mut state, "timer start", 0), "running 0:00 (hole 1: 0:00)");
    assert_eq!(run_at(&mut state, "hole next", 300), "hole 2");
    assert_eq!(run_at(&mut state, "timer", 420), "running 7:00 (hole 2: 2:00, avg 3:30)");
    assert_eq!(run_at(&mut state, "timer stop", 480), "stopped 8:00 (hole 2: 3:00, avg 4:00)");
    assert_eq!(run_at(&mut state, "timer status", 900), "stopped 8:00 (hole 2: 3:00, avg 4:00)");
    assert_eq!(run_at(&mut state, "timer reset", 900), "stopped 0:00 (hole 1: 0:00)");
}

#[test]
fn export_and_import_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut state = new_state();
    run(&mut state, "course Riverside");

    let csv_path = dir.path().join("round.csv");
    let out = run(&mut state, &format!("export csv \"{}\"", csv_path.display()));
    assert_eq!(out, format!("wrote {}", csv_path.display()));
    assert!(std::fs::read_to_string(&csv_path)?.starts_with("Hole,1,2"));

    let json_path = dir.path().join("round.json");
    run(&mut state, &format!("export json \"{}\"", json_path.display()));
    run(&mut state, "course Elsewhere");
    let out = run(&mut state, &format!("import \"{}\"", json_path.display()));
    assert!(out.starts_with("imported"));
    assert_eq!(state.model.snapshot().course, "Riverside");

    let bad_path = dir.path().join("bad.json");
    std::fs::write(&bad_path, "{ nope")?;
    let before = state.model.snapshot().clone();
    let out = run(&mut state, &format!("import \"{}\"", bad_path.display()));
    assert!(out.starts_with("Could not import round"));
    assert_eq!(state.model.snapshot(), &before);

    let missing = dir.path().join("missing.json");
    let out = run(&mut state, &format!("import \"{}\"", missing.display()));
    assert!(out.starts_with("Could not read"));
    Ok(())
}
