#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_scorecard::model::{Player, RoundSnapshot, default_pars, default_stroke_index};

/// A round of `num_holes` holes with the given players, default pars and
/// stroke indices, Stableford on.
pub fn round_with(num_holes: usize, players: Vec<(&str, i32, Vec<i32>)>) -> RoundSnapshot {
    let players: Vec<Player> = players
        .into_iter()
        .map(|(name, handicap, mut scores)| {
            scores.resize(num_holes, 0);
            Player {
                name: name.to_string(),
                handicap,
                scores,
            }
        })
        .collect();
    RoundSnapshot {
        num_players: players.len(),
        num_holes,
        players,
        pars: default_pars(num_holes),
        stroke_index: default_stroke_index(num_holes),
        use_stableford: true,
        course: "Test Links".to_string(),
    }
}

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_760_000_000 + secs, 0).unwrap()
}
