//! Application layer — port trait definitions.
//!
//! This module depends only on `crate::domain` and the shared wire types —
//! never on `crate::infra`, `crate::commands`, or `crate::output`.

pub mod ports;

#[allow(unused_imports)]
pub use ports::{ConfigStore, EnvironmentSource, ManagementClient, SessionStore};
