pub mod error;
pub mod history;
pub mod round;
pub mod runtime;

pub use error::AppError;
pub use history::History;
pub use round::{Effect, Msg, RoundModel, update};
pub use runtime::{persist, run_round};
