use crate::error::Result;
use crate::model::ShipId;
use crate::store::ShipStore;
use tracing::{info, warn};

pub fn run<S: ShipStore>(store: &mut S, id: ShipId) -> Result<()> {
    if let Err(e) = store.delete(id) {
        if e.is_client_error() {
            warn!(%id, error = %e, "rejected ship delete");
        }
        return Err(e);
    }
    info!(%id, "ship deleted");
    Ok(())
}
