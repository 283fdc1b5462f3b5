//! Wire types for the controller management protocol.
//!
//! Requests and responses are JSON envelopes. Field names on the wire are
//! kebab-case; every field of a result payload is independently optional and
//! absence is not an error.

use serde::{Deserialize, Serialize};

/// The operation name for a non-recursive resource read.
pub const READ_RESOURCE: &str = "read-resource";

/// A management operation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagementRequest {
    /// Operation name, e.g. `read-resource`.
    pub operation: String,
    /// Resource address path segments. Empty means the root resource.
    #[serde(default)]
    pub address: Vec<String>,
}

impl ManagementRequest {
    /// A `read-resource` request addressed to the root management resource.
    #[must_use]
    pub fn read_resource() -> Self {
        Self {
            operation: READ_RESOURCE.to_string(),
            address: Vec::new(),
        }
    }
}

/// Whether the controller executed the operation.
///
/// `Failed` is an application-level outcome carried in a successful transport
/// round trip — it is not a transport error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failed,
}

/// Release and product facts reported by the root management resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,
}

/// A management operation response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ManagementResponse {
    pub outcome: Outcome,
    /// Result payload; may be absent even on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ReleaseInfo>,
    /// Human-readable description accompanying a `failed` outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_description: Option<String>,
}

impl ManagementResponse {
    /// `true` when the envelope signals operation success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
