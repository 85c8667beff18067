use crate::model::color::Color;
use crate::model::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    SlotAscending,
    TotalDescending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::SlotAscending
    }
}

/// Per-slot view derived from the ledger; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRecord {
    pub slot: u8,
    pub color: Color,
    pub amounts: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub records: Vec<SlotRecord>,
    pub grand_total: f64,
    pub active_slots: usize,
}

/// Derives the display statistics from the ledger. Read-only; the ledger
/// stays the source of truth and recomputation is cheap at 50 slots.
pub fn project(ledger: &Ledger, order: SortOrder) -> Projection {
    let mut records: Vec<SlotRecord> = ledger
        .iter()
        .map(|(slot, amounts)| SlotRecord {
            slot,
            color: Color::classify(slot),
            amounts: amounts.to_vec(),
            total: amounts.iter().sum(),
        })
        .collect();

    // Ledger iteration is already slot-ascending; equal totals keep that
    // order because the sort below is stable.
    if order == SortOrder::TotalDescending {
        records.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    let grand_total = records.iter().map(|r| r.total).sum();
    let active_slots = records.len();

    Projection {
        records,
        grand_total,
        active_slots,
    }
}
