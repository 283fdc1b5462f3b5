//! `castellan disconnect` — discard the saved controller session.

use anyhow::Result;

use crate::application::ports::SessionStore;
use crate::output::OutputContext;

/// Run `castellan disconnect`.
///
/// Succeeds whether or not a session exists.
///
/// # Errors
///
/// Returns an error only if an existing session file cannot be removed.
pub fn run(ctx: &OutputContext, store: &impl SessionStore) -> Result<()> {
    // A session file that no longer parses is still cleared.
    let known = store.load().ok().flatten();
    store.clear()?;
    match known {
        Some(session) => ctx.success(&format!("Disconnected from {}", session.address)),
        None => ctx.info("No active controller session."),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::ControllerSession;
    use crate::infra::SessionManager;

    #[test]
    fn test_disconnect_clears_an_existing_session() {
        let dir = TempDir::new().expect("tempdir");
        let store = SessionManager::with_path(dir.path().join("session.json"));
        store
            .save(&ControllerSession {
                address: "http://ctl:9990/management".to_string(),
                connected_at: Utc::now(),
            })
            .expect("save");

        run(&OutputContext::new(true, true), &store).expect("disconnect");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn test_disconnect_without_session_succeeds() {
        let dir = TempDir::new().expect("tempdir");
        let store = SessionManager::with_path(dir.path().join("session.json"));
        assert!(run(&OutputContext::new(true, true), &store).is_ok());
    }

    #[test]
    fn test_disconnect_clears_a_corrupt_session_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").expect("write corrupt file");
        let store = SessionManager::with_path(path.clone());

        run(&OutputContext::new(true, true), &store).expect("disconnect");
        assert!(!path.exists());
    }
}
