use serde::{Deserialize, Serialize};

/// Fixed partition of the 50 board slots, taken from the betting chart.
const RED_SLOTS: [u8; 17] = [
    1, 2, 7, 8, 12, 13, 18, 19, 23, 24, 29, 30, 34, 35, 40, 45, 46,
];
const GREEN_SLOTS: [u8; 16] = [5, 6, 11, 16, 17, 21, 22, 27, 28, 32, 33, 38, 39, 43, 44, 49];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Classifies a slot number. Blue is the catch-all: every slot not
    /// listed red or green falls there, which covers the whole 1..=50 range.
    pub fn classify(slot: u8) -> Color {
        if RED_SLOTS.contains(&slot) {
            Color::Red
        } else if GREEN_SLOTS.contains(&slot) {
            Color::Green
        } else {
            Color::Blue
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}
