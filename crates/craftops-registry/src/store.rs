use craftops_types::{ErrorNode, RegistryFile};
use std::path::{Path, PathBuf};

/// On-disk home of `players.json`.
///
/// There is no locking: the daily refresh and an interactive refresh may
/// race and the last writer wins, which is acceptable at this cadence.
pub struct PlayerStore {
    path: PathBuf,
}

impl PlayerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted registry; a missing file is an empty registry.
    pub fn load(&self) -> Result<RegistryFile, ErrorNode> {
        if !self.path.exists() {
            return Ok(RegistryFile::default());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ErrorNode::leaf(
                "player_store",
                format!("failed to read {}", self.path.display()),
                e.to_string(),
            )
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ErrorNode::leaf(
                "player_store",
                format!("malformed registry file {}", self.path.display()),
                e.to_string(),
            )
        })
    }

    pub fn save(&self, file: &RegistryFile) -> Result<(), ErrorNode> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ErrorNode::leaf(
                    "player_store",
                    format!("failed to create {}", parent.display()),
                    e.to_string(),
                )
            })?;
        }
        let content = serde_json::to_string_pretty(file).map_err(|e| {
            ErrorNode::leaf("player_store", "failed to encode registry", e.to_string())
        })?;
        std::fs::write(&self.path, content).map_err(|e| {
            ErrorNode::leaf(
                "player_store",
                format!("failed to write {}", self.path.display()),
                e.to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerStore::new(dir.path().join("players.json"));
        let file = store.load().unwrap();
        assert!(file.players.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerStore::new(dir.path().join("data").join("players.json"));

        let mut file = RegistryFile::default();
        file.players.insert(
            "uuid-a".to_string(),
            craftops_types::PlayerRecord {
                username: "Alice".to_string(),
                playtime: 3600,
                ..Default::default()
            },
        );
        store.save(&file).unwrap();

        assert_eq!(store.load().unwrap(), file);
    }

    #[test]
    fn malformed_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, "{ broken").unwrap();

        let err = PlayerStore::new(&path).load().unwrap_err();
        assert_eq!(err.origin(), "player_store");
    }
}
