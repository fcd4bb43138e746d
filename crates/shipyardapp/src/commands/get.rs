use crate::error::Result;
use crate::model::{Ship, ShipId};
use crate::store::ShipStore;

pub fn run<S: ShipStore>(store: &S, id: ShipId) -> Result<Ship> {
    store.get(id)
}
