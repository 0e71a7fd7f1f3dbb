pub mod args;
pub mod controller;
pub mod model;
pub mod mvu;
pub mod repl;
pub mod score;
pub mod storage;
pub mod view;

pub use model::{Player, RoundSnapshot, Totals};
pub use mvu::{AppError, Effect, Msg, RoundModel, run_round, update};
pub use score::{average_per_hole, compute_totals, stableford_points, strokes_for_hole};
