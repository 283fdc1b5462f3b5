//! Controller session persistence.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::SessionStore;
use crate::domain::ControllerSession;

/// Session file manager.
///
/// Stores the active controller session as JSON at
/// `~/.castellan/session.json`; the `CASTELLAN_SESSION` environment variable
/// overrides the path.
pub struct SessionManager {
    path: PathBuf,
}

impl SessionManager {
    /// Create a session manager using the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Ok(val) = std::env::var("CASTELLAN_SESSION") {
            return Ok(Self::with_path(PathBuf::from(val)));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".castellan").join("session.json")))
    }

    /// Create a session manager with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for SessionManager {
    fn load(&self) -> Result<Option<ControllerSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading session file {}", self.path.display()))?;
        let session: ControllerSession = serde_json::from_str(&content)
            .with_context(|| format!("parsing session file {}", self.path.display()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &ControllerSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(session).context("serializing session")?;
        std::fs::write(&self.path, &content)
            .with_context(|| format!("writing session file {}", self.path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", self.path.display()))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("removing session file {}", self.path.display()))?;
        }
        Ok(())
    }
}
