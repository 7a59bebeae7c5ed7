#![forbid(unsafe_code)]

//! Build-tool integration
//!
//! `ExportHook` is created once with the sites to check and invoked once per
//! export with the routes about to be written. It finds the hosting
//! configuration from the project directory, runs the gate and hands the
//! routes back unchanged when every dynamic route is covered.

use crate::config::locator::{ConfigLocator, FindUp};
use crate::engine::gate;
use crate::engine::routes::RouteSet;
use crate::error::{FhrError, GateError};
use crate::output::Reporter;
use crate::types::SiteId;
use std::path::Path;
use tracing::info;

/// Validates an export's routes against the hosting configuration
#[derive(Debug, Clone)]
pub struct ExportHook<L: ConfigLocator = FindUp> {
    sites: Vec<SiteId>,
    locator: L,
}

impl ExportHook<FindUp> {
    /// Creates a hook that looks for firebase.json from the export directory up
    ///
    /// # Errors
    ///
    /// Returns `GateError::NoSitesRequested` if `sites` is empty.
    pub fn new(sites: Vec<SiteId>) -> Result<Self, GateError> {
        Self::with_locator(sites, FindUp::default())
    }
}

impl<L: ConfigLocator> ExportHook<L> {
    /// Creates a hook with a custom configuration lookup
    ///
    /// # Errors
    ///
    /// Returns `GateError::NoSitesRequested` if `sites` is empty.
    pub fn with_locator(sites: Vec<SiteId>, locator: L) -> Result<Self, GateError> {
        if sites.is_empty() {
            return Err(GateError::NoSitesRequested);
        }
        Ok(ExportHook { sites, locator })
    }

    /// Checks the export's routes and returns them unchanged on success
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no configuration is visible from
    /// `dir`, and otherwise the errors of [`gate::run`].
    pub fn export_path_map(
        &self,
        routes: RouteSet,
        dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<RouteSet, FhrError> {
        info!("Validating Firebase Hosting Rules (FHR)...");

        let config = self.locator.load(dir)?;
        info!("Found Firebase config at {}.", config.path.display());

        gate::run(routes, &config, &self.sites, reporter)
    }
}
