#![forbid(unsafe_code)]

//! Rewrite rule validation
//!
//! Compares the rewrite rule a route needs against the rewrites configured
//! for each selected hosting entry.

use crate::config::firebase_json::{HostingEntry, HostingRewrite};
use crate::types::{RewriteRule, RoutePath};
use serde::Serialize;

/// Kind of discrepancy found for a route on a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingRule,
    IncorrectDestination,
}

/// A single discrepancy between the expected and configured rewrites
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// No rewrite with the expected source exists for the site
    MissingRule {
        site: String,
        route: RoutePath,
        expected: RewriteRule,
    },

    /// A rewrite with the expected source exists but serves another file
    IncorrectDestination {
        site: String,
        route: RoutePath,
        found: HostingRewrite,
        expected: RewriteRule,
    },
}

impl Finding {
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::MissingRule { .. } => FindingKind::MissingRule,
            Finding::IncorrectDestination { .. } => FindingKind::IncorrectDestination,
        }
    }

    pub fn site(&self) -> &str {
        match self {
            Finding::MissingRule { site, .. } | Finding::IncorrectDestination { site, .. } => site,
        }
    }

    pub fn route(&self) -> &RoutePath {
        match self {
            Finding::MissingRule { route, .. } | Finding::IncorrectDestination { route, .. } => {
                route
            }
        }
    }

    pub fn expected(&self) -> &RewriteRule {
        match self {
            Finding::MissingRule { expected, .. }
            | Finding::IncorrectDestination { expected, .. } => expected,
        }
    }

    /// The configured rewrite, for incorrect destinations
    pub fn found(&self) -> Option<&HostingRewrite> {
        match self {
            Finding::MissingRule { .. } => None,
            Finding::IncorrectDestination { found, .. } => Some(found),
        }
    }
}

/// Checks one route's expected rule against every selected entry
///
/// Yields at most one finding per entry, in entry order. Within an entry the
/// first rewrite with a matching source is the one compared.
pub fn validate<'a>(
    route: &'a RoutePath,
    expected: &'a RewriteRule,
    entries: &'a [&'a HostingEntry],
) -> impl Iterator<Item = Finding> + 'a {
    entries.iter().filter_map(move |entry| {
        let site = entry.site().unwrap_or_default().to_string();

        match entry.find_rewrite(&expected.source) {
            None => Some(Finding::MissingRule {
                site,
                route: route.clone(),
                expected: expected.clone(),
            }),
            Some(found) if found.destination.as_deref() != Some(expected.destination.as_str()) => {
                Some(Finding::IncorrectDestination {
                    site,
                    route: route.clone(),
                    found: found.clone(),
                    expected: expected.clone(),
                })
            }
            Some(_) => None,
        }
    })
}
