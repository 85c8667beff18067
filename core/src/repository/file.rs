use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::warn;

use crate::model::ledger::Snapshot;
use crate::repository::traits::SnapshotRepository;

const SNAPSHOT_FILE_NAME: &str = "board.json";

/// Single-file JSON store under ~/.tallyboard (or an injected base dir,
/// which the tests use).
#[derive(Clone)]
pub struct FileSnapshotRepository {
    file_path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".tallyboard")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(SNAPSHOT_FILE_NAME);

        Ok(FileSnapshotRepository { file_path: path })
    }

    fn read_snapshot(&self) -> Result<Snapshot> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        match self.read_snapshot() {
            Ok(snapshot) if snapshot.is_valid() => Ok(Some(snapshot)),
            Ok(_) => {
                warn!(path = %self.file_path.display(), "stored snapshot failed validation, ignoring");
                Ok(None)
            }
            Err(err) => {
                // Unreadable file is the same as no file; the ledger starts
                // empty and the next save overwrites whatever is there.
                warn!(path = %self.file_path.display(), error = %err, "could not read snapshot, ignoring");
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ledger::Ledger;
    use tempfile::tempdir;

    fn sample_snapshot() -> Snapshot {
        let mut ledger = Ledger::new();
        ledger.add(7, 10.50);
        ledger.add(7, 5.25);
        ledger.add(42, 1.0);
        Snapshot::new("2026年8月30日星期日".to_string(), ledger)
    }

    #[test]
    fn test_load_without_file_is_absent() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let snapshot = sample_snapshot();
        repo.save(&snapshot).unwrap();
        assert_eq!(repo.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_malformed_json_loads_as_absent() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(dir.path().join(SNAPSHOT_FILE_NAME), "{not json").unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_invalid_snapshot_loads_as_absent() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(
            dir.path().join(SNAPSHOT_FILE_NAME),
            r#"{"date":"d","amounts":{"99":[1.0]}}"#,
        )
        .unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_delete_removes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.save(&sample_snapshot()).unwrap();
        repo.delete().unwrap();
        assert_eq!(repo.load().unwrap(), None);
        repo.delete().unwrap();
    }

    #[test]
    fn test_on_disk_layout_uses_string_slot_keys() {
        let dir = tempdir().unwrap();
        let repo = FileSnapshotRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.save(&sample_snapshot()).unwrap();
        let raw = fs::read_to_string(dir.path().join(SNAPSHOT_FILE_NAME)).unwrap();
        assert!(raw.contains("\"date\""));
        assert!(raw.contains("\"amounts\""));
        assert!(raw.contains("\"7\""));
        assert!(raw.contains("\"42\""));
    }
}
