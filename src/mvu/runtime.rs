use log::warn;

use crate::mvu::error::AppError;
use crate::mvu::round::{Effect, Msg, RoundModel, update};
use crate::storage::{STORAGE_KEY, Storage};

/// Runs `msg` through [`update`] and drains the resulting effects.
///
/// Returns the alerts the UI should show. A failed persist is reported as an
/// error but the in-memory change stays applied.
///
/// # Errors
///
/// Returns `AppError::Storage` or `AppError::Parse` if the snapshot could not
/// be written.
pub fn run_round(
    model: &mut RoundModel,
    msg: Msg,
    storage: &mut dyn Storage,
) -> Result<Vec<String>, AppError> {
    let mut alerts = Vec::new();
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        match effect {
            Effect::Persist => {
                if let Err(e) = persist(model, storage) {
                    warn!("could not persist round: {e}");
                    return Err(e);
                }
            }
            Effect::Alert(message) => alerts.push(message),
        }
    }
    Ok(alerts)
}

/// Writes the current snapshot under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn persist(model: &RoundModel, storage: &mut dyn Storage) -> Result<(), AppError> {
    let json = serde_json::to_string(model.snapshot())?;
    storage.save(STORAGE_KEY, &json)?;
    Ok(())
}
