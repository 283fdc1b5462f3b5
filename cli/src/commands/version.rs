//! `castellan version` — report CLI and controller version information.
//!
//! Read-only: queries the controller's root resource when a session is
//! active, and never mutates local or remote state. The report's line order
//! is fixed; optional remote facts are omitted or substituted with fallback
//! text, never reordered.

use std::fmt::Write as _;

use anyhow::Result;
use castellan_common::{ManagementRequest, ManagementResponse};

use crate::application::ports::{EnvironmentSource, ManagementClient};
use crate::domain::error::VersionError;
use crate::domain::report::Report;
use crate::output::OutputContext;

/// Fixed product banner, always the first report line.
pub const BANNER: &str = "Castellan Admin Command-line Interface";

/// Shown instead of release facts when no controller session is active.
pub const CONNECT_HINT: &str =
    "<connect to the controller and re-run the version command to see the release info>";

const RELEASE_LABEL: &str = "Castellan release: ";
const PRODUCT_LABEL: &str = "Castellan product: ";
const NO_RELEASE_INFO: &str = "release info was not provided by the controller";
const NO_RESULT: &str = "result was not available.";
const NO_FAILURE_DESCRIPTION: &str = "Failure description is not available.";

/// Environment snapshot key for the product home, printed in the header.
const HOME_KEY: &str = "CASTELLAN_HOME";

/// Trailer facts, printed in this order after the remote section.
const TRAILER_KEYS: [&str; 6] = [
    "CARGO_HOME",
    "rustc.release",
    "rustc.host",
    "rustc.commit",
    "os.name",
    "os.version",
];

/// Run `castellan version`.
///
/// The assembled report is written to the sink in one call.
///
/// # Errors
///
/// Fails only when an active controller connection exists and the
/// `read-resource` round trip hits a transport error; nothing is emitted on
/// that path.
pub fn run<C: ManagementClient>(
    ctx: &OutputContext,
    client: Option<&C>,
    env: &impl EnvironmentSource,
) -> Result<()> {
    let report = build_report(client, env)?;
    ctx.print_line(&report.render());
    Ok(())
}

/// Assemble the full report without emitting it.
///
/// # Errors
///
/// Returns [`VersionError::ReleaseFetch`] on a transport failure.
pub fn build_report<C: ManagementClient>(
    client: Option<&C>,
    env: &impl EnvironmentSource,
) -> Result<Report, VersionError> {
    let mut report = Report::new();
    report.push(BANNER);
    report.push(fact_line(env, HOME_KEY));

    match client {
        None => report.push(format!("{RELEASE_LABEL}{CONNECT_HINT}")),
        Some(client) => {
            let response = client
                .execute(&ManagementRequest::read_resource())
                .map_err(VersionError::ReleaseFetch)?;
            report.extend(release_section(&response));
        }
    }

    for key in TRAILER_KEYS {
        report.push(fact_line(env, key));
    }
    Ok(report)
}

/// Render the remote section for a completed round trip: the release line
/// plus, when the controller reports one, the product line.
fn release_section(response: &ManagementResponse) -> Vec<String> {
    let mut line = String::from(RELEASE_LABEL);

    if !response.is_success() {
        line.push_str(
            response
                .failure_description
                .as_deref()
                .unwrap_or(NO_FAILURE_DESCRIPTION),
        );
        return vec![line];
    }
    let Some(info) = &response.result else {
        line.push_str(NO_RESULT);
        return vec![line];
    };

    let mut found_version_fact = false;
    if let Some(version) = &info.release_version {
        line.push_str(version);
        found_version_fact = true;
    }
    if let Some(codename) = &info.release_codename {
        // An empty or all-whitespace codename does not count as present.
        if !codename.trim().is_empty() {
            let _ = write!(line, " \"{codename}\"");
            found_version_fact = true;
        }
    }
    if !found_version_fact {
        line.push_str(NO_RELEASE_INFO);
    }

    let mut lines = vec![line];
    if let Some(name) = &info.product_name {
        let mut product = format!("{PRODUCT_LABEL}{name}");
        if let Some(version) = &info.product_version {
            let _ = write!(product, " {version}");
        }
        lines.push(product);
    }
    lines
}

/// `key: value` line for a local fact. An absent fact renders with an empty
/// value — the line itself is never skipped.
fn fact_line(env: &impl EnvironmentSource, key: &str) -> String {
    format!("{key}: {}", env.get(key).unwrap_or_default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
