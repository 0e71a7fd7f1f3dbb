use crate::controller::session::{RestoreSource, start_session};
use crate::controller::timer::PaceTimer;
use crate::mvu::round::RoundModel;
use crate::storage::Storage;

/// Everything a scoring session owns: the round, its storage and the
/// pace-of-play clock.
pub struct ReplState {
    pub model: RoundModel,
    pub storage: Box<dyn Storage>,
    pub timer: PaceTimer,
    pub share_base_url: String,
    pub restored_from: RestoreSource,
}

impl ReplState {
    /// Restores the round (link, then storage, then defaults) and wraps it
    /// with a stopped timer.
    pub fn new(
        mut storage: Box<dyn Storage>,
        history_limit: usize,
        link: Option<&str>,
        share_base_url: impl Into<String>,
    ) -> Self {
        let (model, restored_from) = start_session(history_limit, link, storage.as_mut());
        Self {
            model,
            storage,
            timer: PaceTimer::new(),
            share_base_url: share_base_url.into(),
            restored_from,
        }
    }
}
