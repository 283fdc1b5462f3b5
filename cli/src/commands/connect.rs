//! `castellan connect` — establish a controller session.

use anyhow::{Context, Result};
use castellan_common::ManagementRequest;
use clap::Args;

use crate::application::ports::{ManagementClient, SessionStore};
use crate::domain::config::CastellanConfig;
use crate::domain::session::ControllerSession;
use crate::output::OutputContext;

/// Arguments for the connect command.
#[derive(Args)]
pub struct ConnectArgs {
    /// Controller management endpoint, e.g. http://localhost:9990/management
    pub controller: Option<String>,
}

/// Pick the endpoint to dial: explicit argument, else the configured address.
#[must_use]
pub fn resolve_address(arg: Option<&str>, config: &CastellanConfig) -> String {
    match arg {
        Some(address) => address.to_string(),
        None => config.controller.address.clone(),
    }
}

/// Run `castellan connect [controller]`.
///
/// Issues one `read-resource` probe; reachability decides whether the session
/// is saved. An operation-level failure still proves a live controller and is
/// reported as a warning.
///
/// # Errors
///
/// Returns an error if the controller cannot be reached or the session cannot
/// be persisted.
pub fn run(
    ctx: &OutputContext,
    address: &str,
    client: &impl ManagementClient,
    store: &impl SessionStore,
) -> Result<()> {
    let response = client
        .execute(&ManagementRequest::read_resource())
        .with_context(|| format!("cannot reach the controller at {address}"))?;

    if !response.is_success() {
        let description = response
            .failure_description
            .as_deref()
            .unwrap_or("no failure description");
        ctx.warn(&format!("Controller answered with a failure: {description}"));
    }

    let session = ControllerSession {
        address: address.to_string(),
        connected_at: chrono::Utc::now(),
    };
    store.save(&session).context("saving controller session")?;

    ctx.success(&format!("Connected to {address}"));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use castellan_common::{ManagementResponse, Outcome};
    use tempfile::TempDir;

    use super::*;
    use crate::domain::TransportError;
    use crate::infra::SessionManager;

    struct Reachable(Outcome);

    impl ManagementClient for Reachable {
        fn execute(
            &self,
            _: &ManagementRequest,
        ) -> Result<ManagementResponse, TransportError> {
            Ok(ManagementResponse {
                outcome: self.0,
                result: None,
                failure_description: None,
            })
        }
    }

    struct Unreachable;

    impl ManagementClient for Unreachable {
        fn execute(
            &self,
            _: &ManagementRequest,
        ) -> Result<ManagementResponse, TransportError> {
            Err(TransportError::Io("connection refused".to_string()))
        }
    }

    fn store_in(dir: &TempDir) -> SessionManager {
        SessionManager::with_path(dir.path().join("session.json"))
    }

    // -----------------------------------------------------------------------
    // resolve_address
    // -----------------------------------------------------------------------

    #[test]
    fn test_resolve_address_prefers_the_argument() {
        let config = CastellanConfig::default();
        let address = resolve_address(Some("http://ctl:9990/management"), &config);
        assert_eq!(address, "http://ctl:9990/management");
    }

    #[test]
    fn test_resolve_address_falls_back_to_config() {
        let mut config = CastellanConfig::default();
        config.controller.address = "https://configured/management".to_string();
        assert_eq!(resolve_address(None, &config), "https://configured/management");
    }

    // -----------------------------------------------------------------------
    // run
    // -----------------------------------------------------------------------

    #[test]
    fn test_reachable_controller_saves_the_session() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        let ctx = OutputContext::new(true, true);

        run(&ctx, "http://ctl:9990/management", &Reachable(Outcome::Success), &store)
            .expect("connect");

        let session = store.load().expect("load").expect("session saved");
        assert_eq!(session.address, "http://ctl:9990/management");
    }

    #[test]
    fn test_failed_probe_outcome_still_connects() {
        // A failed operation outcome proves a live controller.
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        let ctx = OutputContext::new(true, true);

        run(&ctx, "http://ctl:9990/management", &Reachable(Outcome::Failed), &store)
            .expect("connect despite failed outcome");

        assert!(store.load().expect("load").is_some());
    }

    #[test]
    fn test_unreachable_controller_fails_and_saves_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        let ctx = OutputContext::new(true, true);

        let err = run(&ctx, "http://ctl:9990/management", &Unreachable, &store)
            .expect_err("must fail");
        assert!(err.to_string().contains("cannot reach the controller"));
        assert!(store.load().expect("load").is_none());
    }
}
