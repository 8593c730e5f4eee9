use crate::error::{PredictoError, Result};
use crate::model::ProjectInput;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Persistent slot for the in-progress [`ProjectInput`].
///
/// One JSON file, last writer wins. Loading is infallible from the caller's
/// perspective: a missing, unreadable, or corrupt draft degrades to an empty
/// input and is never surfaced as an error.
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted draft, or an empty input when there is none or it
    /// cannot be parsed.
    pub fn load(&self) -> ProjectInput {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No draft to restore");
                return ProjectInput::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(input) => {
                tracing::debug!(path = %self.path.display(), "Restored draft");
                input
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt draft, starting empty");
                ProjectInput::default()
            }
        }
    }

    /// Persist the draft atomically (temp file + rename in the same
    /// directory).
    pub fn save(&self, input: &ProjectInput) -> Result<()> {
        let target_dir = self
            .path
            .parent()
            .ok_or_else(|| PredictoError::Storage("Draft path has no parent directory".to_string()))?;
        std::fs::create_dir_all(target_dir)?;

        let content = serde_json::to_string_pretty(input)?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| PredictoError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| PredictoError::Storage(format!("Failed to write to temp file: {}", e)))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| PredictoError::Storage(format!("Failed to sync temp file: {}", e)))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| PredictoError::Storage(format!("Failed to persist draft: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "Saved draft");
        Ok(())
    }

    /// Delete the slot. Missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, ProjectType};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DraftStore {
        DraftStore::new(dir.path().join("draft.json"))
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), ProjectInput::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut input = ProjectInput {
            project_type: Some(ProjectType::Mobile),
            complexity: Some(Complexity::Medium),
            team_size: Some(5),
            duration_weeks: Some(12),
            location: Some("Berlin, Germany".to_string()),
            ..Default::default()
        };
        input.toggle_feature("Payment Gateway");

        store.save(&input).unwrap();
        assert_eq!(store.load(), input);
    }

    #[test]
    fn test_corrupt_draft_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), ProjectInput::default());
    }

    #[test]
    fn test_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&ProjectInput::default()).unwrap();
        let newer = ProjectInput {
            team_size: Some(7),
            ..Default::default()
        };
        store.save(&newer).unwrap();
        assert_eq!(store.load(), newer);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&ProjectInput::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
    }
}
