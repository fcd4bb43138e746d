use super::ShipTable;
use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while TableStore handles the "what" (ids, filtering, paging).
pub trait StorageBackend {
    /// Load the whole table. A missing table is an empty one.
    fn load_table(&self) -> Result<ShipTable>;

    /// Save the whole table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_table(&self, table: &ShipTable) -> Result<()>;
}
