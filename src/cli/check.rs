//! Check command implementation
//!
//! This module implements the `fhr check` command, which:
//! - Loads fhr.toml (if present) and merges it with the command line
//! - Collects routes from arguments and an optional routes file
//! - Finds firebase.json from the project directory upward
//! - Validates every dynamic route against each requested site
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_SUCCESS, collect_routes, exit_code_for, load_settings, resolve_sites};
use crate::config::locator::FindUp;
use crate::config::settings;
use crate::error::FhrError;
use crate::hook::ExportHook;
use crate::output::{HumanFormatter, JsonlFormatter, Reporter};
use crate::types::SiteId;
use std::path::PathBuf;
use tracing::warn;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub routes: Vec<String>,
    pub sites: Vec<SiteId>,
    pub routes_file: Option<PathBuf>,
    pub dir: PathBuf,
    pub settings: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
}

/// Run the check command
///
/// # Arguments
///
/// * `options` - Routes, sites and file locations from the command line
///
/// # Returns
///
/// Exit code:
/// - 0: Success (every dynamic route has a correct rewrite)
/// - 1: Failed (one or more rewrite rules missing or incorrect)
/// - 2: Error (missing configuration, site mismatch, invalid route)
/// - 3: Parse error (invalid firebase.json, routes file or fhr.toml)
pub fn run_check(options: &CheckOptions) -> i32 {
    match run_check_inner(options) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(options: &CheckOptions) -> Result<(), FhrError> {
    let settings = load_settings(&options.dir, options.settings.as_deref())?;
    let sites = resolve_sites(&options.sites, &settings);
    let hook = ExportHook::with_locator(sites, FindUp::new(settings.fhr.config_file.clone()))?;

    let routes = collect_routes(&options.routes, options.routes_file.as_deref())?;
    if routes.is_empty() {
        warn!("No routes given. Only the hosting sites will be checked.");
    }

    let format = options
        .format
        .map(settings::OutputFormat::from)
        .unwrap_or(settings.output.format);
    let color = options
        .color
        .map(settings::ColorOption::from)
        .unwrap_or(settings.output.color);

    let mut reporter: Box<dyn Reporter> = match format {
        settings::OutputFormat::Human => Box::new(HumanFormatter::stderr(color)),
        settings::OutputFormat::Jsonl => Box::new(JsonlFormatter::stdout()),
    };

    hook.export_path_map(routes, &options.dir, reporter.as_mut())?;
    Ok(())
}
