use crate::model::RoundSnapshot;
use crate::score::{average_per_hole, compute_totals, format_to_par, gross_to_par};

const NAME_WIDTH: usize = 20;

/// Fixed-width card for the terminal. `current_hole` (1-based) is marked
/// with `*` in the header.
#[must_use]
pub fn render_card(snapshot: &RoundSnapshot, current_hole: usize) -> String {
    let mut out = format!("{}\n", snapshot.course);

    out.push_str(&format!("{:<NAME_WIDTH$}", "Hole"));
    for hole in 1..=snapshot.num_holes {
        let mark = if hole == current_hole { "*" } else { "" };
        out.push_str(&format!("{:>4}", format!("{mark}{hole}")));
    }
    out.push_str(&format!("{:>6}\n", "Tot"));

    out.push_str(&format!("{:<NAME_WIDTH$}", "Par"));
    for par in &snapshot.pars {
        out.push_str(&format!("{par:>4}"));
    }
    out.push_str(&format!("{:>6}\n", snapshot.total_par()));

    out.push_str(&format!("{:<NAME_WIDTH$}", "SI"));
    for si in &snapshot.stroke_index {
        out.push_str(&format!("{si:>4}"));
    }
    out.push('\n');

    for player in snapshot.active_players() {
        out.push_str(&format!("{:<NAME_WIDTH$}", player.name));
        for hole in 0..snapshot.num_holes {
            let cell = match player.score_at(hole) {
                0 => "-".to_string(),
                s => s.to_string(),
            };
            out.push_str(&format!("{cell:>4}"));
        }
        let total: i32 = player.scores.iter().take(snapshot.num_holes).sum();
        out.push_str(&format!("{total:>6}\n"));
    }

    out.push_str(&format!("{:<NAME_WIDTH$}", "Avg"));
    for avg in average_per_hole(snapshot) {
        let cell = if avg > 0.0 { format!("{avg:.1}") } else { String::new() };
        out.push_str(&format!("{cell:>4}"));
    }
    out.push('\n');
    out
}

/// One line per active player with out/in/gross/net and, when Stableford is
/// on, points.
#[must_use]
pub fn render_totals(snapshot: &RoundSnapshot) -> String {
    let points_header = if snapshot.use_stableford {
        format!("{:>5}", "Pts")
    } else {
        String::new()
    };
    let mut out = format!(
        "{:<NAME_WIDTH$}{:>5}{:>5}{:>6}{:>6}{:>6}{points_header}  E/B/P/Bo\n",
        "Player", "Out", "In", "Gross", "ToPar", "Net"
    );

    for (idx, t) in compute_totals(snapshot).iter().enumerate() {
        let to_par = gross_to_par(snapshot, idx).map(format_to_par).unwrap_or_default();
        let points = if snapshot.use_stableford {
            format!("{:>5}", t.points)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:<NAME_WIDTH$}{:>5}{:>5}{:>6}{:>6}{:>6}{points}  {}/{}/{}/{}\n",
            t.name, t.gross_out, t.gross_in, t.gross, to_par, t.net, t.eagles, t.birdies, t.pars, t.bogeys
        ));
    }
    out
}
