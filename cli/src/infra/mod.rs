//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the HTTP management
//! transport, filesystem stores, and host environment probing.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod env;
pub mod http;
pub mod session;

#[allow(unused_imports)]
pub use config::YamlConfigStore;
#[allow(unused_imports)]
pub use env::ProcessEnvironment;
#[allow(unused_imports)]
pub use http::HttpManagementClient;
#[allow(unused_imports)]
pub use session::SessionManager;
