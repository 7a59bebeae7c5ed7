#![forbid(unsafe_code)]

//! The validation gate
//!
//! Selects the hosting entries for the requested sites, checks every dynamic
//! route against each of them and collects all findings before deciding
//! whether the export may proceed. A malformed route stops the pass at once;
//! findings never do.

use crate::config::firebase_json::{FirebaseConfig, HostingEntry};
use crate::engine::routes::RouteSet;
use crate::error::{FhrError, GateError};
use crate::output::Reporter;
use crate::rules::{Finding, PatternTranslator, validate};
use crate::types::SiteId;
use std::path::PathBuf;
use tracing::debug;

/// Outcome of checking a route set against a configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// All findings, ordered by route then by hosting entry
    pub findings: Vec<Finding>,
    /// Path of the configuration that was checked
    pub config_path: PathBuf,
    /// Sites whose entries were checked, in configuration order
    pub sites: Vec<String>,
    /// Number of routes in the input
    pub routes_checked: usize,
    /// Number of those routes that were dynamic
    pub dynamic_routes: usize,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Configuration file name used in diagnostics
    pub fn config_file_name(&self) -> String {
        self.config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config_path.display().to_string())
    }
}

/// Selects the hosting entries whose site was requested
///
/// # Errors
///
/// In order: `GateError::NoSitesRequested` for an empty request,
/// `ConfigError::MissingHosting` without a hosting section,
/// `GateError::NoMatchingSites` when nothing matches,
/// `GateError::IncompleteSites` when any requested site has no entry, and
/// `GateError::AmbiguousSites` when a site matches more than one entry or is
/// requested more than once.
pub fn select_entries<'a>(
    config: &'a FirebaseConfig,
    sites: &[SiteId],
) -> Result<Vec<&'a HostingEntry>, FhrError> {
    if sites.is_empty() {
        return Err(GateError::NoSitesRequested.into());
    }

    let hosting = config.hosting()?;
    let requested: Vec<String> = sites.iter().map(|site| site.to_string()).collect();

    let selected: Vec<&HostingEntry> = hosting
        .iter()
        .filter(|entry| {
            entry
                .site()
                .is_some_and(|site| requested.iter().any(|r| r == site))
        })
        .collect();

    if selected.is_empty() {
        return Err(GateError::NoMatchingSites { requested }.into());
    }

    let found: Vec<String> = selected
        .iter()
        .filter_map(|entry| entry.site())
        .map(str::to_string)
        .collect();
    let missing: Vec<String> = requested
        .iter()
        .filter(|site| !found.contains(*site))
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(GateError::IncompleteSites {
            requested,
            found,
            missing,
        }
        .into());
    }

    let duplicated = found
        .iter()
        .enumerate()
        .any(|(i, site)| found[..i].contains(site));
    if duplicated || found.len() != requested.len() {
        return Err(GateError::AmbiguousSites { requested, found }.into());
    }

    Ok(selected)
}

/// Checks every dynamic route against every selected hosting entry
///
/// Static routes are skipped without translation.
///
/// # Errors
///
/// Returns any site selection error from [`select_entries`], or
/// `RouteError::InvalidDynamicSegment` for the first malformed route.
pub fn check(
    routes: &RouteSet,
    config: &FirebaseConfig,
    sites: &[SiteId],
) -> Result<ValidationReport, FhrError> {
    let entries = select_entries(config, sites)?;
    let translator = PatternTranslator::new()?;

    let mut findings = Vec::new();
    let mut dynamic_routes = 0;

    for route in routes.dynamic() {
        dynamic_routes += 1;
        let expected = translator.translate(route.as_str())?;
        debug!(route = %route, source = %expected.source, "checking dynamic route");
        findings.extend(validate(route, &expected, &entries));
    }

    Ok(ValidationReport {
        findings,
        config_path: config.path.clone(),
        sites: entries
            .iter()
            .filter_map(|entry| entry.site())
            .map(str::to_string)
            .collect(),
        routes_checked: routes.len(),
        dynamic_routes,
    })
}

/// Checks the routes, reports the outcome and gates the export
///
/// Returns the route set unchanged when every dynamic route is covered.
///
/// # Errors
///
/// Returns the errors of [`check`], an I/O error if the report cannot be
/// written, or `GateError::RulesFailed` once all findings have been reported.
pub fn run(
    routes: RouteSet,
    config: &FirebaseConfig,
    sites: &[SiteId],
    reporter: &mut dyn Reporter,
) -> Result<RouteSet, FhrError> {
    let report = check(&routes, config, sites)?;
    reporter.report(&report)?;

    if !report.passed() {
        return Err(GateError::RulesFailed {
            config_path: report.config_path,
            findings: report.findings.len(),
        }
        .into());
    }

    Ok(routes)
}
