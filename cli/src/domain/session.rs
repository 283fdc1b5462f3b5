//! Controller session record persisted between invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously established controller connection.
///
/// Presence of a saved session is what makes the shell "connected": commands
/// that talk to the controller construct their client from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerSession {
    /// Management endpoint URL, e.g. `http://localhost:9990/management`.
    pub address: String,
    /// When the session was established.
    pub connected_at: DateTime<Utc>,
}
