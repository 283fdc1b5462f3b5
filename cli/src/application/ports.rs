//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared wire types —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use castellan_common::{ManagementRequest, ManagementResponse};

use crate::domain::{CastellanConfig, ControllerSession, TransportError};

// ── Management Client Port ────────────────────────────────────────────────────

/// Abstracts the controller transport so commands can be tested with stubs.
///
/// One call is one synchronous, blocking round trip. No retries and no
/// command-level timeout — timeouts, if any, belong to the transport
/// implementation.
pub trait ManagementClient {
    /// Execute one management operation against the controller.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the controller cannot be reached or
    /// answers with something that is not a management envelope. An envelope
    /// with a `failed` outcome is a successful call.
    fn execute(&self, request: &ManagementRequest) -> Result<ManagementResponse, TransportError>;
}

// ── Environment Snapshot Port ─────────────────────────────────────────────────

/// Read-only access to named local facts about the host process.
pub trait EnvironmentSource {
    /// Look up a fact by key. An absent fact is `None`, never an error.
    fn get(&self, key: &str) -> Option<String>;
}

// ── Session Store Port ────────────────────────────────────────────────────────

/// Abstracts controller session persistence.
pub trait SessionStore {
    /// Load the saved session, returning `None` if no session exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<ControllerSession>>;

    /// Persist the given session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &ControllerSession) -> Result<()>;

    /// Remove the saved session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be removed.
    fn clear(&self) -> Result<()>;
}

// ── Config Store Port ─────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<CastellanConfig>;

    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be written.
    fn save(&self, config: &CastellanConfig) -> Result<()>;

    /// Path to the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
