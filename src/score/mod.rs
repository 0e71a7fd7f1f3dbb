use crate::model::{RoundSnapshot, Totals};

/// Holes counted as "out"; everything after is "in".
pub const FRONT_NINE: usize = 9;

/// Handicap strokes received on a hole.
///
/// Every player gets `handicap / 18` strokes on every hole, plus one more on
/// the `handicap % 18` holes with the lowest stroke index.
#[must_use]
pub fn strokes_for_hole(handicap: i32, stroke_index: i32) -> i32 {
    let base = handicap / 18;
    let remainder = handicap % 18;
    if stroke_index <= remainder {
        base + 1
    } else {
        base
    }
}

/// Stableford points for one hole, `0` when the hole has not been played.
#[must_use]
pub fn stableford_points(gross: i32, par: i32, strokes: i32) -> i32 {
    if gross <= 0 {
        return 0;
    }
    let net = gross - strokes;
    match net - par {
        i32::MIN..=-3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Totals for each active player, in player order.
#[must_use]
pub fn compute_totals(snapshot: &RoundSnapshot) -> Vec<Totals> {
    let split = FRONT_NINE.min(snapshot.num_holes);

    snapshot
        .active_players()
        .iter()
        .map(|player| {
            let mut totals = Totals {
                name: player.name.clone(),
                ..Totals::default()
            };

            for hole in 0..snapshot.num_holes {
                let gross = player.score_at(hole);
                let par = snapshot.pars.get(hole).copied().unwrap_or(4);
                let si = snapshot.stroke_index.get(hole).copied().unwrap_or(18);
                let strokes = strokes_for_hole(player.handicap, si);

                if hole < split {
                    totals.gross_out += gross;
                } else {
                    totals.gross_in += gross;
                }

                totals.points += stableford_points(gross, par, strokes);

                if gross > 0 {
                    totals.net += gross - strokes;
                    match gross - par {
                        -2 => totals.eagles += 1,
                        -1 => totals.birdies += 1,
                        0 => totals.pars += 1,
                        1 => totals.bogeys += 1,
                        _ => {}
                    }
                }
            }

            totals.gross = totals.gross_out + totals.gross_in;
            totals
        })
        .collect()
}

/// Mean of the recorded (strictly positive) scores on each hole across the
/// active players, to one decimal place. `0.0` where nobody has a score.
#[must_use]
pub fn average_per_hole(snapshot: &RoundSnapshot) -> Vec<f64> {
    let players = snapshot.active_players();
    (0..snapshot.num_holes)
        .map(|hole| {
            let played: Vec<i32> = players
                .iter()
                .map(|p| p.score_at(hole))
                .filter(|&s| s > 0)
                .collect();
            if played.is_empty() {
                0.0
            } else {
                let sum: i32 = played.iter().sum();
                let avg = f64::from(sum) / played.len() as f64;
                (avg * 10.0).round() / 10.0
            }
        })
        .collect()
}

/// Gross relative to par over the holes the player has finished.
#[must_use]
pub fn gross_to_par(snapshot: &RoundSnapshot, player_index: usize) -> Option<i32> {
    let player = snapshot.active_players().get(player_index)?;
    let diff = (0..snapshot.num_holes)
        .filter(|&hole| player.score_at(hole) > 0)
        .map(|hole| player.score_at(hole) - snapshot.pars.get(hole).copied().unwrap_or(4))
        .sum();
    Some(diff)
}

/// Formats a to-par figure the way a leaderboard does: `E`, `+3`, `-2`.
#[must_use]
pub fn format_to_par(diff: i32) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}
