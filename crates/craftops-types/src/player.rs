use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The server stores playtime in ticks; 20 ticks make one second.
pub const TICKS_PER_SECOND: u64 = 20;

/// A player as listed in the server's username cache.
///
/// `uuid` is the stable key. Display names are not unique: two accounts can
/// share one, so callers must never key on `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub uuid: String,
    pub username: String,
}

/// Per-player statistics derived from the remote stat files, already
/// converted from ticks to seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub uuid: String,
    pub playtime_seconds: u64,
}

/// One entry of the persisted registry, keyed by uuid in [`RegistryFile`].
///
/// Unknown fields ride along in `extra` so a refresh never drops data added
/// by hand or by an older version of the tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub playtime: u64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// On-disk shape of `players.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub players: BTreeMap<String, PlayerRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_record_preserves_unknown_fields() {
        let raw = r#"{"username":"Alice","playtime":120,"note":"admin friend"}"#;
        let record: PlayerRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.username, "Alice");
        assert_eq!(record.playtime, 120);
        assert_eq!(record.extra["note"], "admin friend");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["note"], "admin friend");
    }

    #[test]
    fn registry_file_defaults_are_empty() {
        let file: RegistryFile = serde_json::from_str("{}").unwrap();
        assert!(file.last_updated.is_none());
        assert!(file.players.is_empty());
    }
}
