/// Capture `rustc -vV` toolchain facts for the `version` report.
///
/// A missing field becomes an empty string, never a build failure — the
/// report renders absent facts as empty values.
use std::process::Command;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let verbose = Command::new(rustc)
        .arg("-vV")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).into_owned())
        .unwrap_or_default();

    emit("CASTELLAN_RUSTC_RELEASE", field(&verbose, "release"));
    emit("CASTELLAN_RUSTC_HOST", field(&verbose, "host"));
    emit("CASTELLAN_RUSTC_COMMIT", field(&verbose, "commit-hash"));

    println!("cargo::rerun-if-env-changed=RUSTC");
}

fn field<'a>(verbose: &'a str, name: &str) -> &'a str {
    verbose
        .lines()
        .find_map(|line| line.strip_prefix(name).and_then(|rest| rest.strip_prefix(": ")))
        .unwrap_or("")
}

fn emit(key: &str, value: &str) {
    println!("cargo::rustc-env={key}={value}");
}
