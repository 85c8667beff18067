pub mod input;
pub mod model;
pub mod monitor;
pub mod repository;
pub mod service;

pub use input::{is_valid_amount, parse_amount};
pub use model::color::Color;
pub use model::day::DayStamp;
pub use model::ledger::{Ledger, Snapshot, SLOT_MAX, SLOT_MIN};
pub use model::stats::{project, Projection, SlotRecord, SortOrder};
pub use monitor::DayMonitor;
pub use repository::{FileSnapshotRepository, SnapshotRepository};
pub use service::board_service::BoardService;
