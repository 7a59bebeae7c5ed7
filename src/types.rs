#![forbid(unsafe_code)]

//! Core domain types for fhr
//!
//! This module defines the route, site and rewrite types shared by the
//! translator, the validator and the gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page path produced by a static export
///
/// Route paths are non-empty. A path is dynamic when it contains at least one
/// bracketed segment such as `[id]` or `[...slug]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Creates a new RoutePath
    ///
    /// Returns None if the input is empty
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        if path.is_empty() {
            return None;
        }
        Some(RoutePath(path))
    }

    /// Returns true if the path contains a dynamic segment
    pub fn is_dynamic(&self) -> bool {
        self.0.contains('[')
    }

    /// Returns the route path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoutePath::new(value).ok_or_else(|| "Route path must not be empty".to_string())
    }
}

impl From<RoutePath> for String {
    fn from(route: RoutePath) -> Self {
        route.0
    }
}

/// A validated hosting site identifier
///
/// Site IDs must be non-empty and contain no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

impl SiteId {
    /// Creates a new SiteId, validating the input
    ///
    /// Returns None if the input is empty or contains whitespace
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return None;
        }
        Some(SiteId(id))
    }

    /// Returns the site ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SiteId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SiteId::new(value.clone()).ok_or_else(|| format!("Invalid site ID: '{}'", value))
    }
}

impl From<SiteId> for String {
    fn from(site: SiteId) -> Self {
        site.0
    }
}

/// An expected rewrite rule: the glob to match and the file to serve
///
/// Field order matches the JSON snippet users paste into firebase.json.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewriteRule {
    pub source: String,
    pub destination: String,
}

impl RewriteRule {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        RewriteRule {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Renders the rule as a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                "{{\"source\":{:?},\"destination\":{:?}}}",
                self.source, self.destination
            )
        })
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_validation() {
        assert!(RoutePath::new("/").is_some());
        assert!(RoutePath::new("/post/[id]").is_some());
        assert!(RoutePath::new("").is_none());
    }

    #[test]
    fn test_route_path_is_dynamic() {
        assert!(RoutePath::new("/post/[id]").unwrap().is_dynamic());
        assert!(RoutePath::new("/[...all]").unwrap().is_dynamic());
        assert!(!RoutePath::new("/about").unwrap().is_dynamic());
        assert!(!RoutePath::new("/").unwrap().is_dynamic());
    }

    #[test]
    fn test_site_id_validation() {
        assert!(SiteId::new("my-site").is_some());
        assert!(SiteId::new("site_2").is_some());
        assert!(SiteId::new("").is_none());
        assert!(SiteId::new("my site").is_none());
        assert!(SiteId::new("site\t").is_none());
    }

    #[test]
    fn test_site_id_deserialize_rejects_invalid() {
        let ok: Result<SiteId, _> = serde_json::from_str("\"main\"");
        assert_eq!(ok.unwrap().as_str(), "main");

        let bad: Result<SiteId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_rewrite_rule_json_field_order() {
        let rule = RewriteRule::new("/post/*", "/post/[id].html");
        assert_eq!(
            rule.to_json(),
            r#"{"source":"/post/*","destination":"/post/[id].html"}"#
        );
        assert_eq!(rule.to_string(), rule.to_json());
    }
}
