use crate::input::parse_amount;
use crate::model::day::DayStamp;
use crate::model::ledger::{Ledger, Snapshot};
use crate::model::stats::{project, Projection, SortOrder};
use crate::monitor::DayMonitor;
use crate::repository::SnapshotRepository;
use tracing::warn;

/// Owns the current day's board: the in-memory ledger, its day stamp, the
/// rollover monitor and the persistence mirror. One instance per session.
///
/// Persistence failures are never fatal here. A failed save or delete is
/// logged and the session keeps running on the in-memory state; the only
/// cost is losing unsaved entries at the next restart.
pub struct BoardService<R: SnapshotRepository> {
    repo: R,
    ledger: Ledger,
    day: DayStamp,
    monitor: DayMonitor,
}

impl<R: SnapshotRepository> BoardService<R> {
    /// Hydrates from the stored snapshot, but only when its day stamp is
    /// today's. A stale or missing snapshot means an empty board. This
    /// check runs before the monitor ever ticks, so a rollover that
    /// happened while the process was down cannot resurface old data.
    pub fn new(repo: R) -> Self {
        let day = DayStamp::today();
        let ledger = match repo.load() {
            Ok(Some(snapshot)) if snapshot.date == day.label() => snapshot.amounts,
            Ok(_) => Ledger::new(),
            Err(err) => {
                warn!(error = %err, "failed to load snapshot, starting empty");
                Ledger::new()
            }
        };
        Self {
            repo,
            ledger,
            day,
            monitor: DayMonitor::default(),
        }
    }

    /// Validates free-text input and records it. Returns false without
    /// touching the ledger when the input is not a positive finite number.
    pub fn add_amount(&mut self, slot: u8, raw: &str) -> bool {
        let Some(amount) = parse_amount(raw) else {
            return false;
        };
        if !self.ledger.add(slot, amount) {
            return false;
        }
        self.persist();
        true
    }

    /// Removes a single entry (0-based position within the slot's list).
    /// Missing slot or position is a no-op. The state after the removal is
    /// written out even when it is now empty; only the explicit clear and
    /// the day rollover delete the stored file.
    pub fn remove_amount(&mut self, slot: u8, index: usize) -> bool {
        if self.ledger.remove(slot, index).is_none() {
            return false;
        }
        self.persist();
        true
    }

    /// The explicit clear-all action: empties the ledger and removes the
    /// stored snapshot outright.
    pub fn clear(&mut self) {
        self.ledger.clear();
        if let Err(err) = self.repo.delete() {
            warn!(error = %err, "failed to delete snapshot");
        }
    }

    /// Cadence-gated day check; the UI loop calls this every iteration.
    /// Returns true when a rollover reset happened.
    pub fn tick(&mut self) -> bool {
        if !self.monitor.due() {
            return false;
        }
        self.roll_day_to(DayStamp::today())
    }

    /// Hard reset on day change: adopt the new stamp, drop every entry and
    /// delete the stored snapshot. Nothing carries over. Split out from
    /// `tick` so tests can advance the day without touching the clock.
    pub fn roll_day_to(&mut self, today: DayStamp) -> bool {
        if today == self.day {
            return false;
        }
        self.day = today;
        self.ledger.clear();
        if let Err(err) = self.repo.delete() {
            warn!(error = %err, "failed to delete snapshot on day rollover");
        }
        true
    }

    pub fn projection(&self, order: SortOrder) -> Projection {
        project(&self.ledger, order)
    }

    pub fn day(&self) -> DayStamp {
        self.day
    }

    pub fn day_label(&self) -> String {
        self.day.label()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn persist(&self) {
        let snapshot = Snapshot::new(self.day.label(), self.ledger.clone());
        if let Err(err) = self.repo.save(&snapshot) {
            warn!(error = %err, "failed to save snapshot, continuing with in-memory state");
        }
    }
}
