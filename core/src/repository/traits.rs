use crate::model::ledger::Snapshot;
use anyhow::Result;

/// Mirror of the in-memory ledger in local storage. The board only ever
/// keeps one snapshot: the current day's. Implementations never originate
/// data except when handing back the snapshot at startup.
pub trait SnapshotRepository {
    /// Returns the stored snapshot, or None when nothing usable is stored.
    /// Corrupt or unreadable data counts as absent, not as an error.
    fn load(&self) -> Result<Option<Snapshot>>;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
    fn delete(&self) -> Result<()>;
}
