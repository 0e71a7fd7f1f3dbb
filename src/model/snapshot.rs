use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::player::Player;
use crate::model::utils::{clamp_round, value_as_f64};

pub const MIN_PLAYERS: i32 = 1;
pub const MAX_PLAYERS: i32 = 4;
pub const MIN_HOLES: i32 = 1;
pub const MAX_HOLES: i32 = 18;
pub const MIN_PAR: i32 = 3;
pub const MAX_PAR: i32 = 6;
pub const DEFAULT_PLAYERS: usize = 2;
pub const DEFAULT_COURSE: &str = "Local Links";

/// Suggestions offered by the UI; any other label is accepted as-is.
pub const COURSE_PRESETS: &[&str] = &[
    "Local Links",
    "Municipal Nine",
    "Riverside Parkland",
    "Heathland Championship",
    "Executive Par 3",
];

const PAR3_HOLES: [usize; 4] = [2, 6, 10, 15];
const PAR5_HOLES: [usize; 3] = [4, 8, 12];

/// Complete serializable state of a round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub num_players: usize,
    pub num_holes: usize,
    pub players: Vec<Player>,
    pub pars: Vec<i32>,
    #[serde(rename = "si")]
    pub stroke_index: Vec<i32>,
    pub use_stableford: bool,
    pub course: String,
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        let num_holes = MAX_HOLES as usize;
        Self {
            num_players: DEFAULT_PLAYERS,
            num_holes,
            players: (0..DEFAULT_PLAYERS)
                .map(|i| Player::placeholder(i, num_holes))
                .collect(),
            pars: default_pars(num_holes),
            stroke_index: default_stroke_index(num_holes),
            use_stableford: false,
            course: DEFAULT_COURSE.to_string(),
        }
    }
}

impl RoundSnapshot {
    /// Normalizes an untrusted JSON document into a valid snapshot.
    ///
    /// Field presence and types are never trusted: counts and every numeric
    /// entry are rounded and clamped, arrays are truncated or padded with
    /// defaults, and missing players become placeholders.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let num_players = value
            .get("numPlayers")
            .and_then(value_as_f64)
            .map_or(DEFAULT_PLAYERS, |n| {
                clamp_round(n, MIN_PLAYERS, MAX_PLAYERS) as usize
            });
        let num_holes = value
            .get("numHoles")
            .and_then(value_as_f64)
            .map_or(MAX_HOLES as usize, |n| {
                clamp_round(n, MIN_HOLES, MAX_HOLES) as usize
            });

        let defaults_par = default_pars(num_holes);
        let raw_pars = value.get("pars").and_then(Value::as_array);
        let pars = (0..num_holes)
            .map(|hole| {
                raw_pars
                    .and_then(|arr| arr.get(hole))
                    .and_then(value_as_f64)
                    .map_or(defaults_par[hole], |p| clamp_round(p, MIN_PAR, MAX_PAR))
            })
            .collect();

        let max_si = si_upper_bound(num_holes);
        let raw_si = value.get("si").and_then(Value::as_array);
        let stroke_index = (0..num_holes)
            .map(|hole| {
                raw_si
                    .and_then(|arr| arr.get(hole))
                    .and_then(value_as_f64)
                    .map_or(default_si_for(hole), |si| clamp_round(si, 1, max_si))
            })
            .collect();

        let raw_players = value.get("players").and_then(Value::as_array);
        let players = (0..num_players)
            .map(|i| match raw_players.and_then(|arr| arr.get(i)) {
                Some(p) if p.is_object() => Player::from_value(p, i, num_holes),
                _ => Player::placeholder(i, num_holes),
            })
            .collect();

        let use_stableford = match value.get("useStableford") {
            Some(Value::Bool(b)) => *b,
            Some(other) => value_as_f64(other).is_some_and(|n| n != 0.0),
            None => false,
        };
        let course = value
            .get("course")
            .and_then(Value::as_str)
            .map_or_else(|| DEFAULT_COURSE.to_string(), str::to_string);

        Self {
            num_players,
            num_holes,
            players,
            pars,
            stroke_index,
            use_stableford,
            course,
        }
    }

    /// Re-runs normalization on an already typed snapshot.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match serde_json::to_value(self) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    /// The first `num_players` entries of `players`.
    #[must_use]
    pub fn active_players(&self) -> &[Player] {
        let end = self.num_players.min(self.players.len());
        &self.players[..end]
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.pars.iter().sum()
    }

    /// Resizes pars, stroke indices and every player's scores to `num_holes`,
    /// padding with defaults. Stroke indices that now exceed the hole count are
    /// pulled back into range.
    pub fn resize_holes(&mut self, num_holes: usize) {
        let defaults_par = default_pars(num_holes);
        self.pars.truncate(num_holes);
        while self.pars.len() < num_holes {
            self.pars.push(defaults_par[self.pars.len()]);
        }

        self.stroke_index.truncate(num_holes);
        while self.stroke_index.len() < num_holes {
            self.stroke_index.push(default_si_for(self.stroke_index.len()));
        }
        let max_si = si_upper_bound(num_holes);
        for si in &mut self.stroke_index {
            *si = (*si).clamp(1, max_si);
        }

        for player in &mut self.players {
            player.resize_scores(num_holes);
        }
        self.num_holes = num_holes;
    }

    /// Truncates or grows the player list. Growth always creates fresh
    /// placeholders.
    pub fn resize_players(&mut self, num_players: usize) {
        self.players.truncate(num_players);
        while self.players.len() < num_players {
            let index = self.players.len();
            self.players.push(Player::placeholder(index, self.num_holes));
        }
        self.num_players = num_players;
    }
}

/// Par pattern across 18 holes, truncated to `num_holes`.
#[must_use]
pub fn default_pars(num_holes: usize) -> Vec<i32> {
    (0..num_holes)
        .map(|hole| {
            if PAR3_HOLES.contains(&hole) {
                3
            } else if PAR5_HOLES.contains(&hole) {
                5
            } else {
                4
            }
        })
        .collect()
}

#[must_use]
pub fn default_stroke_index(num_holes: usize) -> Vec<i32> {
    (0..num_holes).map(default_si_for).collect()
}

fn default_si_for(hole: usize) -> i32 {
    i32::try_from(hole + 1).unwrap_or(MAX_HOLES)
}

fn si_upper_bound(num_holes: usize) -> i32 {
    i32::try_from(num_holes).unwrap_or(MAX_HOLES).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_par_pattern() {
        let pars = default_pars(18);
        assert_eq!(pars, vec![4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 4]);
        assert_eq!(pars.iter().sum::<i32>(), 71);
        assert_eq!(default_pars(5), vec![4, 4, 3, 4, 5]);
    }

    #[test]
    fn serializes_with_short_keys() {
        let value = serde_json::to_value(RoundSnapshot::default()).unwrap();
        assert!(value.get("numPlayers").is_some());
        assert!(value.get("si").is_some());
        assert!(value.get("useStableford").is_some());
        assert!(value.get("stroke_index").is_none());
    }

    #[test]
    fn from_value_fills_missing() {
        let snap = RoundSnapshot::from_value(&json!({}));
        assert_eq!(snap, RoundSnapshot::default());
    }

    #[test]
    fn from_value_handles_non_object() {
        let snap = RoundSnapshot::from_value(&json!([1, 2, 3]));
        assert_eq!(snap, RoundSnapshot::default());
    }
}
