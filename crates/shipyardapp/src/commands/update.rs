use crate::error::Result;
use crate::model::{Ship, ShipDraft, ShipId};
use crate::store::ShipStore;
use crate::validation;
use tracing::{info, warn};

/// Merges the present fields of `patch` onto ship `id` and re-rates it.
///
/// Supplied fields are validated before the store is consulted, so an invalid
/// patch fails with `Validation` whether or not the id exists.
pub fn run<S: ShipStore>(store: &mut S, id: ShipId, patch: ShipDraft) -> Result<Ship> {
    if let Err(e) = validation::validate(&patch) {
        warn!(%id, error = %e, "rejected ship update");
        return Err(e);
    }

    let mut ship = store.get(id).inspect_err(|e| {
        if e.is_client_error() {
            warn!(%id, error = %e, "rejected ship update");
        }
    })?;
    patch.apply_to(&mut ship.data);
    store.update(&ship)?;

    info!(%id, rating = ship.data.rating, "ship updated");
    Ok(ship)
}
