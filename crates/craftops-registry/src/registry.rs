use crate::store::PlayerStore;
use craftops_remote::{Executor, extract_json_objects};
use craftops_types::{ErrorNode, PlayerIdentity, PlayerStats, TICKS_PER_SECOND};
use serde_json::Value;
use std::collections::BTreeMap;

/// Fetches the username cache and per-player statistic files from the
/// managed host and keeps the persisted registry up to date.
pub struct PlayerRegistry<'a, E> {
    executor: &'a E,
    server_dir: String,
}

impl<'a, E: Executor> PlayerRegistry<'a, E> {
    pub fn new(executor: &'a E, server_dir: impl Into<String>) -> Self {
        Self {
            executor,
            server_dir: server_dir.into(),
        }
    }

    /// Read the canonical uuid/username mapping from the server.
    ///
    /// An empty list means the cache file was empty, which callers must
    /// treat as unusable rather than "zero players".
    pub async fn fetch_players(&self) -> Result<Vec<PlayerIdentity>, ErrorNode> {
        let command = format!("cat {}/usernamecache.json", self.server_dir);
        let output = self.executor.execute(&command).await.map_err(|e| {
            ErrorNode::leaf("fetch_players", "failed to invoke remote transport", e.to_string())
        })?;
        if !output.success() {
            return Err(ErrorNode::leaf(
                "fetch_players",
                "ssh command error when reading usernames",
                output.stderr,
            ));
        }

        let mapping: BTreeMap<String, String> =
            serde_json::from_str(&output.stdout).map_err(|_| {
                ErrorNode::leaf(
                    "fetch_players",
                    "invalid JSON output when reading usernames",
                    output.stdout.clone(),
                )
            })?;
        Ok(mapping
            .into_iter()
            .map(|(uuid, username)| PlayerIdentity { uuid, username })
            .collect())
    }

    /// Read the statistic files for the given uuids in one remote round-trip.
    ///
    /// The remote `cat` concatenates every file into a single stream; the
    /// parsed objects are zipped back onto the request order positionally,
    /// so a parsed-object count that differs from the request count is an
    /// explicit desync error rather than a silent misattribution.
    pub async fn fetch_stats(&self, uuids: &[String]) -> Result<Vec<PlayerStats>, ErrorNode> {
        let files = uuids
            .iter()
            .map(|uuid| format!("{}/world/stats/{uuid}.json", self.server_dir))
            .collect::<Vec<_>>()
            .join(" ");
        let command = format!("cat {files}");
        let output = self.executor.execute(&command).await.map_err(|e| {
            ErrorNode::leaf("fetch_stats", "failed to invoke remote transport", e.to_string())
        })?;
        if !output.success() {
            return Err(ErrorNode::leaf(
                "fetch_stats",
                "ssh command error when reading player stats",
                output.stderr,
            ));
        }

        let objects = extract_json_objects(&output.stdout);
        if objects.len() != uuids.len() {
            return Err(ErrorNode::leaf(
                "fetch_stats",
                "desync between requested stat files and remote output",
                format!("requested {} files, parsed {} objects", uuids.len(), objects.len()),
            ));
        }

        let mut stats = Vec::with_capacity(uuids.len());
        for (uuid, object) in uuids.iter().zip(objects) {
            let value: Value = serde_json::from_str(object).map_err(|e| {
                ErrorNode::leaf(
                    "fetch_stats",
                    "invalid JSON output when reading player stats",
                    e.to_string(),
                )
            })?;
            let ticks = value
                .pointer("/stats/minecraft:custom/minecraft:play_time")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            stats.push(PlayerStats {
                uuid: uuid.clone(),
                playtime_seconds: ticks / TICKS_PER_SECOND,
            });
        }
        Ok(stats)
    }

    /// Refresh the persisted registry from the server.
    ///
    /// Records are merged by uuid: username and playtime are updated in
    /// place while any unrecognized historical fields ride along untouched.
    /// If either fetch comes back unusable the persisted file is left
    /// byte-for-byte as it was. Returns the number of players written.
    pub async fn refresh(&self, store: &PlayerStore) -> Result<usize, ErrorNode> {
        let mut file = store
            .load()
            .map_err(|e| e.wrap("refresh", "failed to read persisted registry"))?;

        let players = self
            .fetch_players()
            .await
            .map_err(|e| e.wrap("refresh", "failed to get players data"))?;
        if players.is_empty() {
            return Err(ErrorNode::leaf(
                "refresh",
                "failed to get players data",
                "username cache came back empty",
            ));
        }

        let uuids: Vec<String> = players.iter().map(|p| p.uuid.clone()).collect();
        let stats = self
            .fetch_stats(&uuids)
            .await
            .map_err(|e| e.wrap("refresh", "failed to get player stats"))?;

        let mut merged = BTreeMap::new();
        for (identity, stat) in players.iter().zip(&stats) {
            let mut record = file.players.get(&identity.uuid).cloned().unwrap_or_default();
            record.username = identity.username.clone();
            record.playtime = stat.playtime_seconds;
            merged.insert(identity.uuid.clone(), record);
        }
        file.players = merged;
        file.last_updated = Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

        store
            .save(&file)
            .map_err(|e| e.wrap("refresh", "failed to write persisted registry"))?;
        tracing::info!(players = file.players.len(), "registry refreshed");
        Ok(file.players.len())
    }
}
