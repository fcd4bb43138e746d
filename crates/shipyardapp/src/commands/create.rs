use crate::error::Result;
use crate::model::{Ship, ShipDraft};
use crate::store::ShipStore;
use crate::validation;
use tracing::{info, warn};

pub fn run<S: ShipStore>(store: &mut S, draft: ShipDraft) -> Result<Ship> {
    if let Err(e) = validation::require_complete(&draft).and_then(|_| validation::validate(&draft))
    {
        warn!(error = %e, "rejected ship create");
        return Err(e);
    }

    let ship = store.insert(draft.into_data()?)?;
    info!(id = %ship.id, name = %ship.data.name, rating = ship.data.rating, "ship created");
    Ok(ship)
}
