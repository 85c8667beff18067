#[cfg(test)]
mod tests {
    use crate::model::day::DayStamp;
    use crate::model::ledger::{Ledger, Snapshot};
    use crate::model::stats::SortOrder;
    use crate::repository::SnapshotRepository;
    use crate::service::board_service::BoardService;
    use anyhow::{anyhow, Result};
    use chrono::Duration;
    use std::cell::RefCell;

    struct MockSnapshotRepo {
        stored: RefCell<Option<Snapshot>>,
        fail_saves: bool,
    }

    impl MockSnapshotRepo {
        fn empty() -> Self {
            Self {
                stored: RefCell::new(None),
                fail_saves: false,
            }
        }

        fn with_snapshot(snapshot: Snapshot) -> Self {
            Self {
                stored: RefCell::new(Some(snapshot)),
                fail_saves: false,
            }
        }

        fn failing_saves() -> Self {
            Self {
                stored: RefCell::new(None),
                fail_saves: true,
            }
        }
    }

    impl SnapshotRepository for &MockSnapshotRepo {
        fn load(&self) -> Result<Option<Snapshot>> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, snapshot: &Snapshot) -> Result<()> {
            if self.fail_saves {
                return Err(anyhow!("disk full"));
            }
            *self.stored.borrow_mut() = Some(snapshot.clone());
            Ok(())
        }

        fn delete(&self) -> Result<()> {
            *self.stored.borrow_mut() = None;
            Ok(())
        }
    }

    fn todays_snapshot(build: impl FnOnce(&mut Ledger)) -> Snapshot {
        let mut ledger = Ledger::new();
        build(&mut ledger);
        Snapshot::new(DayStamp::today().label(), ledger)
    }

    #[test]
    fn test_hydrates_from_todays_snapshot() {
        let repo = MockSnapshotRepo::with_snapshot(todays_snapshot(|l| {
            l.add(7, 10.50);
            l.add(7, 5.25);
        }));
        let service = BoardService::new(&repo);
        assert_eq!(service.ledger().slot_total(7), 15.75);
    }

    #[test]
    fn test_discards_stale_snapshot_at_startup() {
        let yesterday = DayStamp::from_date(DayStamp::today().date() - Duration::days(1));
        let mut ledger = Ledger::new();
        ledger.add(7, 10.50);
        let repo = MockSnapshotRepo::with_snapshot(Snapshot::new(yesterday.label(), ledger));

        let service = BoardService::new(&repo);
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_add_persists_current_state() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        assert!(service.add_amount(3, "2.00"));

        let stored = repo.stored.borrow().clone().unwrap();
        assert_eq!(stored.date, DayStamp::today().label());
        assert_eq!(stored.amounts.slot_amounts(3), &[2.0]);
    }

    #[test]
    fn test_invalid_input_leaves_ledger_and_store_untouched() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        for raw in ["-5", "abc", "0", "inf", ""] {
            assert!(!service.add_amount(3, raw), "{:?} should be rejected", raw);
        }
        assert!(service.ledger().is_empty());
        assert!(repo.stored.borrow().is_none());
    }

    #[test]
    fn test_remove_to_empty_overwrites_rather_than_deletes() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(3, "2.00");
        assert!(service.remove_amount(3, 0));

        let projection = service.projection(SortOrder::SlotAscending);
        assert_eq!(projection.grand_total, 0.0);
        assert_eq!(projection.active_slots, 0);

        // A mutation happened, so the store holds the empty ledger; it is
        // not deleted the way clear() deletes it.
        let stored = repo.stored.borrow().clone().unwrap();
        assert!(stored.amounts.is_empty());
    }

    #[test]
    fn test_remove_missing_position_is_noop() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(3, "2.00");
        assert!(!service.remove_amount(3, 9));
        assert!(!service.remove_amount(4, 0));
        assert_eq!(service.ledger().slot_amounts(3), &[2.0]);
    }

    #[test]
    fn test_clear_empties_ledger_and_deletes_snapshot() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(12, "9.99");
        service.clear();

        assert!(service.ledger().is_empty());
        assert!(repo.stored.borrow().is_none());
    }

    #[test]
    fn test_day_rollover_resets_everything() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(7, "10.50");
        assert!(repo.stored.borrow().is_some());

        let tomorrow = DayStamp::from_date(DayStamp::today().date() + Duration::days(1));
        assert!(service.roll_day_to(tomorrow));

        assert!(service.ledger().is_empty());
        assert_eq!(service.day(), tomorrow);
        assert!(repo.stored.borrow().is_none());
    }

    #[test]
    fn test_same_day_roll_is_noop() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(7, "10.50");
        assert!(!service.roll_day_to(DayStamp::today()));
        assert_eq!(service.ledger().slot_total(7), 10.50);
        assert!(repo.stored.borrow().is_some());
    }

    #[test]
    fn test_tick_without_day_change_keeps_state() {
        let repo = MockSnapshotRepo::empty();
        let mut service = BoardService::new(&repo);
        service.add_amount(7, "10.50");
        assert!(!service.tick());
        assert_eq!(service.ledger().slot_total(7), 10.50);
    }

    #[test]
    fn test_save_failure_keeps_in_memory_state() {
        let repo = MockSnapshotRepo::failing_saves();
        let mut service = BoardService::new(&repo);
        assert!(service.add_amount(7, "10.50"));

        // The write failed but the session continues on memory.
        assert_eq!(service.ledger().slot_total(7), 10.50);
        assert!(repo.stored.borrow().is_none());
    }
}
