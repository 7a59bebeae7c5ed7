#![forbid(unsafe_code)]

//! Route pattern translation
//!
//! Turns a dynamic route such as `/post/[id]` into the rewrite rule Firebase
//! Hosting needs for it: a source glob (`/post/*`) and the exported HTML file
//! (`/post/[id].html`).
//!
//! Translation runs in three passes so that a trailing slug is consumed
//! before stray `.`-prefixed segments are rejected:
//!
//! 1. a trailing `[...name]` becomes `**`
//! 2. any remaining `[.name]` is an error
//! 3. every remaining `[name]` becomes `*`

use crate::error::RouteError;
use crate::types::RewriteRule;
use regex::Regex;

/// Trailing catch-all segment, e.g. `[...slug]` at the end of the path
const SLUG_PATTERN: &str = r"\[\.{3}[^\]/]+\]$";

/// Any bracketed segment that starts with a dot
const DOT_SEGMENT_PATTERN: &str = r"\[\.[^\]]*\]";

/// Any bracketed segment that does not start with a dot
const PARAM_PATTERN: &str = r"\[[^.\]][^\]]*\]";

/// Suffix Next.js gives exported pages
const HTML_SUFFIX: &str = ".html";

/// Compiled translation patterns
///
/// Build once and reuse across routes.
#[derive(Debug, Clone)]
pub struct PatternTranslator {
    slug: Regex,
    dot_segment: Regex,
    param: Regex,
}

impl PatternTranslator {
    /// Compiles the translation patterns
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Pattern` if a pattern fails to compile.
    pub fn new() -> Result<Self, RouteError> {
        Ok(PatternTranslator {
            slug: Regex::new(SLUG_PATTERN)?,
            dot_segment: Regex::new(DOT_SEGMENT_PATTERN)?,
            param: Regex::new(PARAM_PATTERN)?,
        })
    }

    /// Translates a route path into its expected rewrite rule
    ///
    /// Paths without `[` are returned unchanged as the source.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::InvalidDynamicSegment` if a bracketed segment
    /// starts with `.` and is not a trailing slug.
    pub fn translate(&self, route: &str) -> Result<RewriteRule, RouteError> {
        if route.is_empty() {
            return Err(RouteError::Empty);
        }

        let destination = format!("{}{}", route, HTML_SUFFIX);
        if !route.contains('[') {
            return Ok(RewriteRule::new(route, destination));
        }

        let source = self.slug.replace(route, "**");

        if self.dot_segment.is_match(&source) {
            return Err(RouteError::InvalidDynamicSegment {
                route: route.to_string(),
            });
        }

        let source = self.param.replace_all(&source, "*");

        Ok(RewriteRule::new(source, destination))
    }
}

/// Translates a single route with freshly compiled patterns
pub fn translate(route: &str) -> Result<RewriteRule, RouteError> {
    PatternTranslator::new()?.translate(route)
}
