use crate::error::Result;
use crate::model::ShipId;
use crate::store::ShipStore;

/// Only store failures surface as errors; a missing id is just `false`.
pub fn run<S: ShipStore>(store: &S, id: ShipId) -> Result<bool> {
    store.exists(id)
}
