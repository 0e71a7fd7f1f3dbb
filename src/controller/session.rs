use log::{info, warn};
use serde_json::Value;
use std::fmt;

use crate::controller::share::decode_share_link;
use crate::mvu::round::{Msg, RoundModel};
use crate::mvu::runtime::run_round;
use crate::storage::{STORAGE_KEY, Storage};

/// Where the starting round came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    Link,
    Storage,
    Defaults,
}

impl fmt::Display for RestoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RestoreSource::Link => "shared link",
            RestoreSource::Storage => "saved round",
            RestoreSource::Defaults => "defaults",
        };
        write!(f, "{s}")
    }
}

/// Builds the session's model: a share link wins, then the stored round,
/// then defaults. Nothing here is recorded in history.
///
/// A round restored from a link is written straight back to storage so it
/// survives the next start without the link.
pub fn start_session(
    history_limit: usize,
    link: Option<&str>,
    storage: &mut dyn Storage,
) -> (RoundModel, RestoreSource) {
    let mut model = RoundModel::new(history_limit);

    if let Some(link) = link {
        match decode_share_link(link) {
            Some(value) => {
                let msg = Msg::LoadSnapshot {
                    value,
                    push_history: false,
                };
                if let Err(e) = run_round(&mut model, msg, storage) {
                    warn!("shared round loaded but not saved: {e}");
                }
                info!("restored round from shared link");
                return (model, RestoreSource::Link);
            }
            None => warn!("ignoring malformed shared link"),
        }
    }

    match load_stored(storage) {
        Some(value) => {
            model.load_snapshot(&value, false);
            info!("restored round from storage");
            (model, RestoreSource::Storage)
        }
        None => (model, RestoreSource::Defaults),
    }
}

fn load_stored(storage: &dyn Storage) -> Option<Value> {
    let text = match storage.load(STORAGE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            warn!("could not read saved round: {e}");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("saved round is not valid JSON: {e}");
            None
        }
    }
}
