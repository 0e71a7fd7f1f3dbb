use log::{debug, info};
use serde_json::Value;

use crate::controller::transfer::parse_import;
use crate::model::{
    MAX_HANDICAP, MAX_HOLES, MAX_NAME_LEN, MAX_PAR, MAX_PLAYERS, MAX_SCORE, MIN_HANDICAP,
    MIN_HOLES, MIN_PAR, MIN_PLAYERS, MIN_SCORE, RoundSnapshot, clamp_int, clamp_round,
    truncate_chars,
};
use crate::mvu::history::{DEFAULT_HISTORY_LIMIT, History};

/// Owns the round being scored together with its undo/redo history.
///
/// Every mutating method clamps its input, records the pre-mutation snapshot,
/// clears redo and then applies the change. Methods return `false` (and leave
/// history alone) when the target player or hole does not exist.
#[derive(Debug, Clone)]
pub struct RoundModel {
    snapshot: RoundSnapshot,
    history: History,
    /// 1-based hole the UI is focused on. Not part of the snapshot.
    current_hole: usize,
}

impl Default for RoundModel {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl RoundModel {
    #[must_use]
    pub fn new(history_limit: usize) -> Self {
        Self {
            snapshot: RoundSnapshot::default(),
            history: History::new(history_limit),
            current_hole: 1,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &RoundSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    fn commit(&mut self, apply: impl FnOnce(&mut RoundSnapshot)) {
        self.history.record(self.snapshot.clone());
        apply(&mut self.snapshot);
    }

    fn clamp_current_hole(&mut self) {
        self.current_hole = self.current_hole.clamp(1, self.snapshot.num_holes.max(1));
    }

    pub fn set_player_count(&mut self, n: i64) {
        let n = clamp_int(n, MIN_PLAYERS, MAX_PLAYERS) as usize;
        self.commit(|snap| snap.resize_players(n));
    }

    pub fn set_hole_count(&mut self, n: i64) {
        let n = clamp_int(n, MIN_HOLES, MAX_HOLES) as usize;
        self.commit(|snap| snap.resize_holes(n));
        self.clamp_current_hole();
    }

    pub fn set_score(&mut self, player: usize, hole: usize, value: f64) -> bool {
        if !self.is_active_player(player) || hole >= self.snapshot.num_holes {
            debug!("ignoring score for player {player} hole {hole}");
            return false;
        }
        let value = clamp_round(value, MIN_SCORE, MAX_SCORE);
        self.commit(|snap| {
            let scores = &mut snap.players[player].scores;
            if scores.len() <= hole {
                scores.resize(hole + 1, 0);
            }
            scores[hole] = value;
        });
        true
    }

    pub fn set_par(&mut self, hole: usize, value: i64) -> bool {
        if hole >= self.snapshot.num_holes {
            return false;
        }
        let value = clamp_int(value, MIN_PAR, MAX_PAR);
        self.commit(|snap| snap.pars[hole] = value);
        true
    }

    pub fn set_stroke_index(&mut self, hole: usize, value: i64) -> bool {
        if hole >= self.snapshot.num_holes {
            return false;
        }
        let max = i32::try_from(self.snapshot.num_holes).unwrap_or(MAX_HOLES);
        let value = clamp_int(value, 1, max);
        self.commit(|snap| snap.stroke_index[hole] = value);
        true
    }

    pub fn set_player_name(&mut self, player: usize, name: &str) -> bool {
        if !self.is_active_player(player) {
            return false;
        }
        let name = truncate_chars(name, MAX_NAME_LEN);
        self.commit(|snap| snap.players[player].name = name);
        true
    }

    pub fn set_handicap(&mut self, player: usize, value: f64) -> bool {
        if !self.is_active_player(player) {
            return false;
        }
        let value = clamp_round(value, MIN_HANDICAP, MAX_HANDICAP);
        self.commit(|snap| snap.players[player].handicap = value);
        true
    }

    pub fn set_course(&mut self, course: &str) {
        let course = course.to_string();
        self.commit(|snap| snap.course = course);
    }

    pub fn set_use_stableford(&mut self, on: bool) {
        self.commit(|snap| snap.use_stableford = on);
    }

    /// Replaces the round with a normalized copy of `value`.
    ///
    /// Restores at startup pass `push_history = false`; a user-initiated
    /// import passes `true` so it can be undone.
    pub fn load_snapshot(&mut self, value: &Value, push_history: bool) {
        let snapshot = RoundSnapshot::from_value(value);
        if push_history {
            self.commit(|snap| *snap = snapshot);
        } else {
            self.snapshot = snapshot;
        }
        self.current_hole = 1;
        info!(
            "loaded round: {} players, {} holes, course {:?}",
            self.snapshot.num_players, self.snapshot.num_holes, self.snapshot.course
        );
    }

    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.snapshot.clone()) {
            Some(previous) => {
                self.snapshot = previous;
                self.clamp_current_hole();
                true
            }
            None => false,
        }
    }

    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.snapshot.clone()) {
            Some(next) => {
                self.snapshot = next;
                self.clamp_current_hole();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.commit(|snap| *snap = RoundSnapshot::default());
        self.clamp_current_hole();
    }

    pub fn set_current_hole(&mut self, hole: i64) {
        let max = i32::try_from(self.snapshot.num_holes).unwrap_or(MAX_HOLES);
        self.current_hole = clamp_int(hole, 1, max) as usize;
    }

    pub fn next_hole(&mut self) {
        self.current_hole = (self.current_hole + 1).min(self.snapshot.num_holes);
    }

    pub fn prev_hole(&mut self) {
        self.current_hole = self.current_hole.saturating_sub(1).max(1);
    }

    fn is_active_player(&self, player: usize) -> bool {
        player < self.snapshot.num_players && player < self.snapshot.players.len()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    SetPlayerCount(i64),
    SetHoleCount(i64),
    SetScore { player: usize, hole: usize, value: f64 },
    SetPar { hole: usize, value: i64 },
    SetStrokeIndex { hole: usize, value: i64 },
    SetPlayerName { player: usize, name: String },
    SetHandicap { player: usize, value: f64 },
    SetCourse(String),
    SetUseStableford(bool),
    LoadSnapshot { value: Value, push_history: bool },
    ImportJson(String),
    Undo,
    Redo,
    Reset,
    GoToHole(i64),
    NextHole,
    PrevHole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the current snapshot to local storage.
    Persist,
    /// Show a message to the user; state was not changed.
    Alert(String),
}

/// Applies `msg` to the model and returns the effects the caller must run.
pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    let changed = match msg {
        Msg::SetPlayerCount(n) => {
            model.set_player_count(n);
            true
        }
        Msg::SetHoleCount(n) => {
            model.set_hole_count(n);
            true
        }
        Msg::SetScore {
            player,
            hole,
            value,
        } => model.set_score(player, hole, value),
        Msg::SetPar { hole, value } => model.set_par(hole, value),
        Msg::SetStrokeIndex { hole, value } => model.set_stroke_index(hole, value),
        Msg::SetPlayerName { player, name } => model.set_player_name(player, &name),
        Msg::SetHandicap { player, value } => model.set_handicap(player, value),
        Msg::SetCourse(course) => {
            model.set_course(&course);
            true
        }
        Msg::SetUseStableford(on) => {
            model.set_use_stableford(on);
            true
        }
        Msg::LoadSnapshot {
            value,
            push_history,
        } => {
            model.load_snapshot(&value, push_history);
            true
        }
        Msg::ImportJson(text) => match parse_import(&text) {
            Ok(value) => {
                model.load_snapshot(&value, true);
                true
            }
            Err(e) => return vec![Effect::Alert(format!("Could not import round: {e}"))],
        },
        Msg::Undo => model.undo(),
        Msg::Redo => model.redo(),
        Msg::Reset => {
            model.reset();
            true
        }
        Msg::GoToHole(hole) => {
            model.set_current_hole(hole);
            false
        }
        Msg::NextHole => {
            model.next_hole();
            false
        }
        Msg::PrevHole => {
            model.prev_hole();
            false
        }
    };

    if changed {
        vec![Effect::Persist]
    } else {
        vec![]
    }
}
