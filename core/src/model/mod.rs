pub mod color;
pub mod day;
pub mod ledger;
pub mod stats;
