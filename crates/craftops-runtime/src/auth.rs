use crate::Result;
use std::path::{Path, PathBuf};

/// What a command requires of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read-only queries, open to everyone.
    Query,
    /// Commands that touch the live server (broadcasts).
    Privileged,
    /// Administrative commands (arbitrary console input, grants).
    Owner,
}

/// Outcome of a capability check, decided before a handler does any work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Denied { reason: String },
}

impl Authorization {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Authorization::Authorized)
    }
}

/// Capability checks against the configured owner and the persisted
/// privileged-user list (one name per line).
pub struct AuthService {
    owner: Option<String>,
    path: PathBuf,
}

impl AuthService {
    pub fn new(owner: Option<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            owner,
            path: path.into(),
        }
    }

    pub fn is_owner(&self, user: &str) -> bool {
        self.owner.as_deref() == Some(user)
    }

    pub fn is_privileged(&self, user: &str) -> Result<bool> {
        Ok(self.is_owner(user) || self.load()?.iter().any(|u| u == user))
    }

    /// The explicit gate called at the top of every command handler.
    pub fn authorize(&self, user: &str, capability: Capability) -> Result<Authorization> {
        let allowed = match capability {
            Capability::Query => true,
            Capability::Privileged => self.is_privileged(user)?,
            Capability::Owner => self.is_owner(user),
        };
        if allowed {
            Ok(Authorization::Authorized)
        } else {
            Ok(Authorization::Denied {
                reason: format!("{user} does not have permission to use this command"),
            })
        }
    }

    /// Add a user to the privileged list. Returns false if already present.
    pub fn grant(&self, user: &str) -> Result<bool> {
        let mut users = self.load()?;
        if users.iter().any(|u| u == user) {
            return Ok(false);
        }
        users.push(user.to_string());
        self.save(&users)?;
        Ok(true)
    }

    /// Remove a user from the privileged list. Returns false if absent.
    pub fn revoke(&self, user: &str) -> Result<bool> {
        let mut users = self.load()?;
        let before = users.len();
        users.retain(|u| u != user);
        if users.len() == before {
            return Ok(false);
        }
        self.save(&users)?;
        Ok(true)
    }

    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn save(&self, users: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, users.join("\n"))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
