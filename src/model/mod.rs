pub mod player;
pub mod snapshot;
pub mod totals;
pub mod utils;

pub use player::*;
pub use snapshot::*;
pub use totals::*;
pub use utils::*;
