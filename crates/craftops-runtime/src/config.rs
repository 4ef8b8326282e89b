use crate::{Error, Result};
use craftops_remote::SshExecutor;
use std::path::PathBuf;

/// Startup configuration, read once from the environment.
///
/// Everything the console needs to reach the managed host and find its
/// files: the ssh endpoint, the remote directory layout and the local data
/// directory for persisted state.
#[derive(Debug, Clone)]
pub struct Config {
    pub ssh_user: String,
    pub ssh_host: String,
    pub ssh_port: u16,
    /// Remote directory holding the server installation (username cache,
    /// world save).
    pub server_dir: String,
    /// Remote directory holding the admin scripts.
    pub scripts_dir: String,
    /// Remote directory holding the rotated server logs.
    pub logs_dir: String,
    /// Local directory for persisted state (players.json, privileged users).
    pub data_dir: PathBuf,
    /// The operator who owns this deployment, if configured.
    pub owner: Option<String>,
}

impl Config {
    /// Read configuration from `CRAFTOPS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source. Missing keys fall
    /// back to defaults matching a local test deployment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port_text = lookup("CRAFTOPS_SSH_PORT").unwrap_or_else(|| "22".to_string());
        let ssh_port: u16 = port_text
            .parse()
            .map_err(|_| Error::Config(format!("invalid CRAFTOPS_SSH_PORT: {port_text}")))?;

        let data_dir = match lookup("CRAFTOPS_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        Ok(Self {
            ssh_user: lookup("CRAFTOPS_SSH_USER").unwrap_or_else(|| "root".to_string()),
            ssh_host: lookup("CRAFTOPS_SSH_HOST").unwrap_or_else(|| "localhost".to_string()),
            ssh_port,
            server_dir: trim_dir(lookup("CRAFTOPS_SERVER_DIR"), "minecraft_server"),
            scripts_dir: trim_dir(lookup("CRAFTOPS_SCRIPTS_DIR"), "."),
            logs_dir: trim_dir(lookup("CRAFTOPS_LOGS_DIR"), "."),
            data_dir,
            owner: lookup("CRAFTOPS_OWNER").filter(|s| !s.is_empty()),
        })
    }

    pub fn executor(&self) -> SshExecutor {
        SshExecutor::new(self.ssh_user.clone(), self.ssh_host.clone(), self.ssh_port)
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.json")
    }

    pub fn privileged_users_path(&self) -> PathBuf {
        self.data_dir.join("privileged_users.txt")
    }
}

/// Local data directory: XDG data dir, falling back to `~/.craftops`.
fn default_data_dir() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("craftops"));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".craftops"));
    }
    Err(Error::Config(
        "could not determine data directory: no HOME or XDG data directory found".to_string(),
    ))
}

fn trim_dir(value: Option<String>, default: &str) -> String {
    let dir = value.unwrap_or_else(|| default.to_string());
    dir.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_a_local_deployment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.ssh_user, "root");
        assert_eq!(config.ssh_host, "localhost");
        assert_eq!(config.ssh_port, 22);
        assert_eq!(config.server_dir, "minecraft_server");
        assert!(config.owner.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("CRAFTOPS_SSH_USER", "mc"),
            ("CRAFTOPS_SSH_HOST", "play.example.org"),
            ("CRAFTOPS_SSH_PORT", "2222"),
            ("CRAFTOPS_LOGS_DIR", "minecraft_server/logs/"),
            ("CRAFTOPS_DATA_DIR", "/var/lib/craftops"),
            ("CRAFTOPS_OWNER", "eric"),
        ]))
        .unwrap();
        assert_eq!(config.ssh_port, 2222);
        // Trailing slash is trimmed so command templates stay clean.
        assert_eq!(config.logs_dir, "minecraft_server/logs");
        assert_eq!(config.players_path(), PathBuf::from("/var/lib/craftops/players.json"));
        assert_eq!(config.owner.as_deref(), Some("eric"));
        assert_eq!(
            config.executor().command_line("true"),
            "ssh mc@play.example.org -p 2222 -v true"
        );
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[("CRAFTOPS_SSH_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
