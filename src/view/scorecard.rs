use maud::{DOCTYPE, Markup, html};

use crate::model::{RoundSnapshot, ScoreDisplay, Totals};
use crate::score::{FRONT_NINE, average_per_hole, compute_totals, format_to_par, gross_to_par};

const PRINT_CSS: &str = "
body { font-family: sans-serif; }
table.scorecard { border-collapse: collapse; }
table.scorecard th, table.scorecard td { border: 1px solid #444; padding: 2px 6px; text-align: center; }
.eagle, .albatross { background: #f5d76e; }
.birdie { background: #e74c3c; color: #fff; }
.bogey { background: #aed6f1; }
.double-bogey { background: #2e86c1; color: #fff; }
@media print { .no-print { display: none; } }
";

/// Full printable page for the round.
#[must_use]
pub fn render_scorecard_page(snapshot: &RoundSnapshot) -> Markup {
    let title = if snapshot.course.is_empty() {
        "Scorecard".to_string()
    } else {
        format!("{} scorecard", snapshot.course)
    };
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PRINT_CSS) }
            }
            body {
                h1 { (title) }
                (render_scorecard_table(snapshot))
            }
        }
    }
}

/// The scorecard table alone: par and stroke index rows, one row per active
/// player, and a row of per-hole averages.
#[must_use]
pub fn render_scorecard_table(snapshot: &RoundSnapshot) -> Markup {
    let totals = compute_totals(snapshot);
    let averages = average_per_hole(snapshot);
    let split = FRONT_NINE.min(snapshot.num_holes);
    let has_back = snapshot.num_holes > FRONT_NINE;
    let par_out: i32 = snapshot.pars.iter().take(split).sum();
    let par_in: i32 = snapshot.pars.iter().skip(split).sum();

    html! {
        table class="scorecard" {
            thead {
                tr {
                    th { "Hole" }
                    @for hole in 1..=snapshot.num_holes {
                        th { (hole) }
                        @if hole == split && has_back { th class="subtotal" { "Out" } }
                    }
                    @if has_back { th class="subtotal" { "In" } }
                    th class="total" { "Total" }
                    th class="total" { "Net" }
                    @if snapshot.use_stableford { th class="total" { "Pts" } }
                }
                tr class="par" {
                    th { "Par" }
                    @for (idx, par) in snapshot.pars.iter().enumerate() {
                        td { (par) }
                        @if idx + 1 == split && has_back { td class="subtotal" { (par_out) } }
                    }
                    @if has_back { td class="subtotal" { (par_in) } }
                    td class="total" { (snapshot.total_par()) }
                    td {}
                    @if snapshot.use_stableford { td {} }
                }
                tr class="si" {
                    th { "SI" }
                    @for (idx, si) in snapshot.stroke_index.iter().enumerate() {
                        td { (si) }
                        @if idx + 1 == split && has_back { td {} }
                    }
                    @if has_back { td {} }
                    td {}
                    td {}
                    @if snapshot.use_stableford { td {} }
                }
            }
            tbody {
                @for (idx, (player, total)) in snapshot.active_players().iter().zip(totals.iter()).enumerate() {
                    tr class="player" data-player=(idx + 1) {
                        th { (player.name) " (" (player.handicap) ")" }
                        @for hole in 0..snapshot.num_holes {
                            @let gross = player.score_at(hole);
                            @let par = snapshot.pars.get(hole).copied().unwrap_or(4);
                            @let disp = ScoreDisplay::for_hole(gross, par);
                            td class=(disp.css_class()) {
                                @if gross > 0 { (gross) }
                            }
                            @if hole + 1 == split && has_back { td class="subtotal" { (total.gross_out) } }
                        }
                        @if has_back { td class="subtotal" { (total.gross_in) } }
                        td class="total" { (total.gross) }
                        td class="total" { (total.net) }
                        @if snapshot.use_stableford { td class="total" { (total.points) } }
                    }
                }
                tr class="average" {
                    th { "Avg" }
                    @for (idx, avg) in averages.iter().enumerate() {
                        td { @if *avg > 0.0 { (format!("{avg:.1}")) } }
                        @if idx + 1 == split && has_back { td {} }
                    }
                    @if has_back { td {} }
                    td {}
                    td {}
                    @if snapshot.use_stableford { td {} }
                }
            }
        }
        (render_stats(snapshot, &totals))
    }
}

fn render_stats(snapshot: &RoundSnapshot, totals: &[Totals]) -> Markup {
    html! {
        table class="stats" {
            thead {
                tr {
                    th { "Player" }
                    th { "To par" }
                    th { "Eagles" }
                    th { "Birdies" }
                    th { "Pars" }
                    th { "Bogeys" }
                }
            }
            tbody {
                @for (idx, total) in totals.iter().enumerate() {
                    tr {
                        td { (total.name) }
                        td { (gross_to_par(snapshot, idx).map(format_to_par).unwrap_or_default()) }
                        td { (total.eagles) }
                        td { (total.birdies) }
                        td { (total.pars) }
                        td { (total.bogeys) }
                    }
                }
            }
        }
    }
}
