//! Common helper functions shared across CLI commands
//!
//! Loading fhr.toml, resolving which sites to check and collecting routes
//! from arguments and routes files.

use crate::config::settings::Settings;
use crate::engine::routes::RouteSet;
use crate::error::{ConfigError, FhrError, GateError};
use crate::types::SiteId;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load settings from an explicit path, or from `fhr.toml` in `dir`
///
/// A missing `fhr.toml` in `dir` yields the defaults. An explicit path that
/// does not exist is an error.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit settings file cannot be read.
/// Returns `ConfigError::Settings` or `ConfigError::Validation` if the file
/// is invalid.
pub(crate) fn load_settings(dir: &Path, explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    match explicit {
        Some(path) => Settings::load(path),
        None => Ok(Settings::discover(dir)?.unwrap_or_default()),
    }
}

/// Sites given on the command line win over the ones in settings
pub(crate) fn resolve_sites(cli_sites: &[SiteId], settings: &Settings) -> Vec<SiteId> {
    if cli_sites.is_empty() {
        settings.fhr.sites.clone()
    } else {
        cli_sites.to_vec()
    }
}

/// Collect routes from positional arguments followed by an optional routes file
///
/// # Errors
///
/// Returns `RouteError::Empty` for an empty route argument, and the errors of
/// [`RouteSet::load`] for the routes file.
pub(crate) fn collect_routes(
    routes: &[String],
    routes_file: Option<&Path>,
) -> Result<RouteSet, FhrError> {
    let mut set = RouteSet::from_paths(routes.iter().cloned())?;
    if let Some(path) = routes_file {
        set.merge(RouteSet::load(path)?);
    }
    Ok(set)
}

/// Maps an error onto the process exit code
pub(crate) fn exit_code_for(error: &FhrError) -> i32 {
    match error {
        FhrError::Gate(GateError::RulesFailed { .. }) => EXIT_FAILED,
        FhrError::Config(ConfigError::Parse { .. } | ConfigError::Settings(_)) => {
            EXIT_PARSE_ERROR
        }
        _ => EXIT_ERROR,
    }
}
