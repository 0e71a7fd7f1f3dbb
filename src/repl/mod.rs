use crate::controller::csv_export::{course_slug, csv_filename, export_csv};
use crate::controller::share::build_share_link;
use crate::controller::transfer::{export_json, read_import_file};
use crate::mvu::round::Msg;
use crate::mvu::runtime::run_round;
use crate::repl::commands::{
    CommandId, ReplCommand, SubcommandId, build_repl_help, find_command, find_subcommand,
    subcommand_help,
};
use crate::repl::helper::ReplHelper;
use crate::repl::parse::{format_parse_error, parse_items};
use crate::view::scorecard::render_scorecard_page;
use crate::view::text::{render_card, render_totals};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::fs;
use std::path::{Path, PathBuf};

mod commands;
mod helper;
mod parse;
mod state;

pub use state::ReplState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplOutcome {
    Continue(String),
    Exit,
}

/// Run the interactive scorecard until `exit`, Ctrl-C or Ctrl-D.
///
/// # Errors
/// Returns an error if the line editor cannot be initialised or reading
/// input fails.
pub fn run_repl(state: &mut ReplState) -> Result<()> {
    println!(
        "Scorecard restored from {}. Type `help` for commands, Ctrl-D to quit.",
        state.restored_from
    );
    println!("{}", render_card(state.model.snapshot(), state.model.current_hole()));
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new().context("init repl")?;
    rl.set_helper(Some(ReplHelper));
    loop {
        let prompt = format!("hole {}> ", state.model.current_hole());
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                match execute_line(state, input, Utc::now()) {
                    ReplOutcome::Continue(output) => {
                        if !output.is_empty() {
                            println!("{output}");
                        }
                    }
                    ReplOutcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read repl input"),
        }
    }
    state.timer.stop(Utc::now());
    Ok(())
}

/// Executes one command line against the session. `now` drives the
/// pace-of-play clock.
pub fn execute_line(state: &mut ReplState, input: &str, now: DateTime<Utc>) -> ReplOutcome {
    let items = match parse_items(input) {
        Ok(items) => items,
        Err(err) => return ReplOutcome::Continue(format_parse_error(input, err.index)),
    };
    let Some((command_token, args)) = items.split_first() else {
        return ReplOutcome::Continue(String::new());
    };
    let Some(command) = find_command(command_token) else {
        return ReplOutcome::Continue(format!("Unknown command: {command_token}\n{}", build_repl_help()));
    };
    debug!("repl command {:?} {:?}", command.id, args);

    let output = match command.id {
        CommandId::Help => build_repl_help(),
        CommandId::Exit | CommandId::Quit => return ReplOutcome::Exit,
        CommandId::Show => render_card(state.model.snapshot(), state.model.current_hole()),
        CommandId::Totals => render_totals(state.model.snapshot()),
        _ => match dispatch(state, command, args, now) {
            Ok(output) => output,
            Err(usage) => usage,
        },
    };
    state.timer.switch_hole(now, state.model.current_hole());
    ReplOutcome::Continue(output)
}

/// Commands that take arguments. `Err` carries a usage message.
fn dispatch(
    state: &mut ReplState,
    command: &'static ReplCommand,
    args: &[String],
    now: DateTime<Utc>,
) -> Result<String, String> {
    let usage = || subcommand_help(command);
    match command.id {
        CommandId::Players => {
            let n = int_arg(args, 0).ok_or_else(usage)?;
            let out = apply(state, Msg::SetPlayerCount(n));
            Ok(with_note(out, format!("{} players", state.model.snapshot().num_players)))
        }
        CommandId::Holes => {
            let n = int_arg(args, 0).ok_or_else(usage)?;
            let out = apply(state, Msg::SetHoleCount(n));
            Ok(with_note(out, format!("{} holes", state.model.snapshot().num_holes)))
        }
        CommandId::Score => {
            let (player, hole, value) = match args.len() {
                2 => (
                    player_arg(state, args, 0)?,
                    state.model.current_hole() - 1,
                    float_arg(args, 1).ok_or_else(usage)?,
                ),
                3 => (
                    player_arg(state, args, 0)?,
                    hole_arg(state, args, 1)?,
                    float_arg(args, 2).ok_or_else(usage)?,
                ),
                _ => return Err(usage()),
            };
            let out = apply(state, Msg::SetScore { player, hole, value });
            let snap = state.model.snapshot();
            let note = format!(
                "{} hole {}: {}",
                snap.players[player].name,
                hole + 1,
                snap.players[player].score_at(hole)
            );
            Ok(with_note(out, note))
        }
        CommandId::Par => {
            let hole = hole_arg(state, args, 0)?;
            let value = int_arg(args, 1).ok_or_else(usage)?;
            let out = apply(state, Msg::SetPar { hole, value });
            Ok(with_note(out, format!("hole {} par {}", hole + 1, state.model.snapshot().pars[hole])))
        }
        CommandId::StrokeIndex => {
            let hole = hole_arg(state, args, 0)?;
            let value = int_arg(args, 1).ok_or_else(usage)?;
            let out = apply(state, Msg::SetStrokeIndex { hole, value });
            Ok(with_note(
                out,
                format!("hole {} SI {}", hole + 1, state.model.snapshot().stroke_index[hole]),
            ))
        }
        CommandId::Name => {
            let player = player_arg(state, args, 0)?;
            if args.len() < 2 {
                return Err(usage());
            }
            let name = args[1..].join(" ");
            let out = apply(state, Msg::SetPlayerName { player, name });
            Ok(with_note(
                out,
                format!("player {} is {}", player + 1, state.model.snapshot().players[player].name),
            ))
        }
        CommandId::Handicap => {
            let player = player_arg(state, args, 0)?;
            let value = float_arg(args, 1).ok_or_else(usage)?;
            let out = apply(state, Msg::SetHandicap { player, value });
            let p = &state.model.snapshot().players[player];
            Ok(with_note(out, format!("{} handicap {}", p.name, p.handicap)))
        }
        CommandId::Course => {
            if args.is_empty() {
                return Err(usage());
            }
            let out = apply(state, Msg::SetCourse(args.join(" ")));
            Ok(with_note(out, format!("course {}", state.model.snapshot().course)))
        }
        CommandId::Stableford => {
            let sub = sub_arg(command, args).ok_or_else(usage)?;
            let on = match sub {
                SubcommandId::On => true,
                SubcommandId::Off => false,
                _ => return Err(usage()),
            };
            let out = apply(state, Msg::SetUseStableford(on));
            Ok(with_note(out, format!("Stableford {}", if on { "on" } else { "off" })))
        }
        CommandId::Hole => {
            let msg = match sub_arg(command, args) {
                Some(SubcommandId::Next) => Msg::NextHole,
                Some(SubcommandId::Prev) => Msg::PrevHole,
                _ => Msg::GoToHole(int_arg(args, 0).ok_or_else(usage)?),
            };
            let out = apply(state, msg);
            Ok(with_note(out, format!("hole {}", state.model.current_hole())))
        }
        CommandId::Undo => {
            if !state.model.history().can_undo() {
                return Ok("Nothing to undo.".to_string());
            }
            Ok(with_note(apply(state, Msg::Undo), "undone".to_string()))
        }
        CommandId::Redo => {
            if !state.model.history().can_redo() {
                return Ok("Nothing to redo.".to_string());
            }
            Ok(with_note(apply(state, Msg::Redo), "redone".to_string()))
        }
        CommandId::Reset => Ok(with_note(apply(state, Msg::Reset), "new card".to_string())),
        CommandId::Import => {
            let path = args.first().ok_or_else(usage)?;
            let text = read_import_file(Path::new(path))
                .map_err(|e| format!("Could not read {path}: {e}"))?;
            let before = state.model.history().undo_depth();
            let out = apply(state, Msg::ImportJson(text));
            if state.model.history().undo_depth() == before && !out.is_empty() {
                return Ok(out);
            }
            Ok(with_note(out, format!("imported {path}")))
        }
        CommandId::Export => {
            let sub = sub_arg(command, args).ok_or_else(usage)?;
            let snapshot = state.model.snapshot();
            let slug = course_slug(&snapshot.course);
            let (contents, default_name) = match sub {
                SubcommandId::Json => (
                    export_json(snapshot).map_err(|e| e.to_string())?,
                    format!("{slug}.json"),
                ),
                SubcommandId::Csv => (
                    export_csv(snapshot).map_err(|e| e.to_string())?,
                    csv_filename(&snapshot.course),
                ),
                SubcommandId::Html => (
                    render_scorecard_page(snapshot).into_string(),
                    format!("{slug}.html"),
                ),
                _ => return Err(usage()),
            };
            let path = args
                .get(1)
                .map_or_else(|| PathBuf::from(default_name), PathBuf::from);
            fs::write(&path, contents).map_err(|e| format!("Could not write {}: {e}", path.display()))?;
            Ok(format!("wrote {}", path.display()))
        }
        CommandId::Share => build_share_link(state.model.snapshot(), &state.share_base_url)
            .map_err(|e| e.to_string()),
        CommandId::Timer => {
            let sub = sub_arg(command, args).unwrap_or(SubcommandId::Status);
            match sub {
                SubcommandId::Start => state.timer.start(now, state.model.current_hole()),
                SubcommandId::Stop => state.timer.stop(now),
                SubcommandId::Reset => state.timer.reset(),
                SubcommandId::Status => {}
                _ => return Err(usage()),
            }
            Ok(state.timer.status(now))
        }
        CommandId::Help | CommandId::Show | CommandId::Totals | CommandId::Exit | CommandId::Quit => {
            Ok(String::new())
        }
    }
}

/// Runs a message and turns alerts or a storage failure into text.
fn apply(state: &mut ReplState, msg: Msg) -> String {
    match run_round(&mut state.model, msg, state.storage.as_mut()) {
        Ok(alerts) => alerts.join("\n"),
        Err(e) => format!("warning: change not saved: {e}"),
    }
}

fn with_note(out: String, note: String) -> String {
    if out.is_empty() { note } else { format!("{out}\n{note}") }
}

fn sub_arg(command: &'static ReplCommand, args: &[String]) -> Option<SubcommandId> {
    args.first()
        .and_then(|token| find_subcommand(command.subcommands, token))
        .map(|sub| sub.id)
}

fn int_arg(args: &[String], idx: usize) -> Option<i64> {
    float_arg(args, idx).map(|v| v.round() as i64)
}

fn float_arg(args: &[String], idx: usize) -> Option<f64> {
    args.get(idx)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn player_arg(state: &ReplState, args: &[String], idx: usize) -> Result<usize, String> {
    let count = state.model.snapshot().num_players;
    match int_arg(args, idx) {
        Some(p) if p >= 1 && (p as usize) <= count => Ok(p as usize - 1),
        _ => Err(format!("Player must be between 1 and {count}.")),
    }
}

fn hole_arg(state: &ReplState, args: &[String], idx: usize) -> Result<usize, String> {
    let count = state.model.snapshot().num_holes;
    match int_arg(args, idx) {
        Some(h) if h >= 1 && (h as usize) <= count => Ok(h as usize - 1),
        _ => Err(format!("Hole must be between 1 and {count}.")),
    }
}
