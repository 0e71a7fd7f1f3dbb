use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::utils::{clamp_round, truncate_chars, value_as_f64};

pub const MAX_NAME_LEN: usize = 20;
pub const MIN_HANDICAP: i32 = 0;
pub const MAX_HANDICAP: i32 = 54;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub handicap: i32,
    /// Gross strokes per hole, `0` meaning the hole has not been played.
    pub scores: Vec<i32>,
}

impl Player {
    /// Fresh placeholder for the player at `index` (0-based), named `Player N`.
    #[must_use]
    pub fn placeholder(index: usize, num_holes: usize) -> Self {
        Self {
            name: default_player_name(index),
            handicap: 0,
            scores: vec![0; num_holes],
        }
    }

    /// Builds a player from untrusted JSON, clamping every field and sizing
    /// `scores` to `num_holes`.
    #[must_use]
    pub fn from_value(value: &Value, index: usize, num_holes: usize) -> Self {
        let name = match value.get("name").and_then(Value::as_str) {
            Some(name) => truncate_chars(name, MAX_NAME_LEN),
            None => default_player_name(index),
        };
        let handicap = value
            .get("handicap")
            .and_then(value_as_f64)
            .map_or(0, |h| clamp_round(h, MIN_HANDICAP, MAX_HANDICAP));
        let raw_scores = value.get("scores").and_then(Value::as_array);
        let scores = (0..num_holes)
            .map(|hole| {
                raw_scores
                    .and_then(|arr| arr.get(hole))
                    .and_then(value_as_f64)
                    .map_or(0, |s| clamp_round(s, MIN_SCORE, MAX_SCORE))
            })
            .collect();
        Self {
            name,
            handicap,
            scores,
        }
    }

    pub fn resize_scores(&mut self, num_holes: usize) {
        self.scores.resize(num_holes, 0);
    }

    #[must_use]
    pub fn score_at(&self, hole: usize) -> i32 {
        self.scores.get(hole).copied().unwrap_or(0)
    }
}

#[must_use]
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}
