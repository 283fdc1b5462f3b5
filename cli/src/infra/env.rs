//! Host-process implementation of the `EnvironmentSource` port.

use crate::application::ports::EnvironmentSource;

// Toolchain facts captured at compile time by `build.rs` from `rustc -vV`.
const RUSTC_RELEASE: Option<&str> = option_env!("CASTELLAN_RUSTC_RELEASE");
const RUSTC_HOST: Option<&str> = option_env!("CASTELLAN_RUSTC_HOST");
const RUSTC_COMMIT: Option<&str> = option_env!("CASTELLAN_RUSTC_COMMIT");

/// Environment snapshot backed by the live process: environment variables,
/// compile-time toolchain constants, and the host OS probe.
///
/// Facts are read fresh on every lookup — nothing is cached between
/// invocations.
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "rustc.release" => nonempty(RUSTC_RELEASE),
            "rustc.host" => nonempty(RUSTC_HOST),
            "rustc.commit" => nonempty(RUSTC_COMMIT),
            "os.name" => sysinfo::System::name(),
            "os.version" => sysinfo::System::os_version(),
            _ => std::env::var(key).ok(),
        }
    }
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
