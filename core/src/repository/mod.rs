pub mod file;
pub mod traits;

pub use file::FileSnapshotRepository;
pub use traits::SnapshotRepository;
