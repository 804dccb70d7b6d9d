// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Lifecycle transitions are logged at `debug`, callback failures and
//! unreadable settings at `warn`. `RUST_LOG` overrides the default level.

use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` for this crate.
///
/// Returns `false` when a global subscriber was already set, which is not an
/// error: tests and embedding hosts install their own.
pub fn init(default_level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_target(true)
        .try_init()
        .is_ok()
}

fn filter(default_level: tracing::Level) -> EnvFilter {
    let directive = format!("{}={}", env!("CARGO_CRATE_NAME"), default_level);
    match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    }
}
