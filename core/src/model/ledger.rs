use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SLOT_MIN: u8 = 1;
pub const SLOT_MAX: u8 = 50;

/// Current-day mapping from slot number to its recorded amounts.
///
/// Keys are plain integers in memory; serde_json stringifies them at the
/// persistence boundary, which is exactly the on-disk layout we want
/// ({"7": [10.5, ...]}). A slot key never maps to an empty list: removal
/// that drains a slot deletes the key outright.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<u8, Vec<f64>>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an amount to a slot. Rejects (returns false, no mutation)
    /// out-of-range slots and amounts that are not finite and positive.
    pub fn add(&mut self, slot: u8, amount: f64) -> bool {
        if !(SLOT_MIN..=SLOT_MAX).contains(&slot) {
            return false;
        }
        if !amount.is_finite() || amount <= 0.0 {
            return false;
        }
        self.0.entry(slot).or_default().push(amount);
        true
    }

    /// Removes the entry at `index` from a slot's list. Returns the removed
    /// amount, or None when the slot or index does not exist. Positions of
    /// later entries shift down; they are not stable ids.
    pub fn remove(&mut self, slot: u8, index: usize) -> Option<f64> {
        let amounts = self.0.get_mut(&slot)?;
        if index >= amounts.len() {
            return None;
        }
        let removed = amounts.remove(index);
        if amounts.is_empty() {
            self.0.remove(&slot);
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn active_slots(&self) -> usize {
        self.0.len()
    }

    pub fn slot_amounts(&self, slot: u8) -> &[f64] {
        self.0.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slot_total(&self, slot: u8) -> f64 {
        self.slot_amounts(slot).iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[f64])> {
        self.0.iter().map(|(slot, amounts)| (*slot, amounts.as_slice()))
    }
}

/// The persisted form: the day label plus the full ledger, written as a
/// single JSON object {"date": "...", "amounts": {...}}.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub date: String,
    pub amounts: Ledger,
}

impl Snapshot {
    pub fn new(date: String, amounts: Ledger) -> Self {
        Self { date, amounts }
    }

    /// A snapshot read back from disk is only trusted if every slot is in
    /// range and every amount is a positive finite number. Anything else is
    /// treated as a corrupt file by the caller.
    pub fn is_valid(&self) -> bool {
        self.amounts.iter().all(|(slot, amounts)| {
            (SLOT_MIN..=SLOT_MAX).contains(&slot)
                && !amounts.is_empty()
                && amounts.iter().all(|a| a.is_finite() && *a > 0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(7, 10.50));
        assert!(ledger.add(7, 5.25));
        assert_eq!(ledger.slot_amounts(7), &[10.50, 5.25]);
        assert_eq!(ledger.slot_total(7), 15.75);
    }

    #[test]
    fn test_add_rejects_invalid_amounts() {
        let mut ledger = Ledger::new();
        assert!(!ledger.add(7, 0.0));
        assert!(!ledger.add(7, -5.0));
        assert!(!ledger.add(7, f64::NAN));
        assert!(!ledger.add(7, f64::INFINITY));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_out_of_range_slot() {
        let mut ledger = Ledger::new();
        assert!(!ledger.add(0, 1.0));
        assert!(!ledger.add(51, 1.0));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_round_trip() {
        let mut ledger = Ledger::new();
        ledger.add(3, 1.0);
        let before = ledger.clone();
        ledger.add(3, 2.0);
        assert_eq!(ledger.remove(3, 1), Some(2.0));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_last_entry_drops_key() {
        let mut ledger = Ledger::new();
        ledger.add(3, 2.0);
        assert_eq!(ledger.remove(3, 0), Some(2.0));
        assert!(ledger.is_empty());
        // The key must be gone, not present with an empty list.
        assert_eq!(ledger.iter().count(), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add(3, 2.0);
        assert_eq!(ledger.remove(4, 0), None);
        assert_eq!(ledger.remove(3, 5), None);
        assert_eq!(ledger.slot_amounts(3), &[2.0]);
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let mut ledger = Ledger::new();
        ledger.add(7, 10.5);
        let snapshot = Snapshot::new("2026年8月30日星期日".to_string(), ledger);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"7\":[10.5]"));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_validation() {
        let mut ledger = Ledger::new();
        ledger.add(7, 10.5);
        assert!(Snapshot::new("d".into(), ledger).is_valid());

        let bad: Snapshot = serde_json::from_str(r#"{"date":"d","amounts":{"99":[1.0]}}"#).unwrap();
        assert!(!bad.is_valid());
        let bad: Snapshot = serde_json::from_str(r#"{"date":"d","amounts":{"7":[-1.0]}}"#).unwrap();
        assert!(!bad.is_valid());
        let bad: Snapshot = serde_json::from_str(r#"{"date":"d","amounts":{"7":[]}}"#).unwrap();
        assert!(!bad.is_valid());
    }
}
