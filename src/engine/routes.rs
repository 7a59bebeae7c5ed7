//! The set of routes produced by an export
//!
//! Routes keep insertion order and are de-duplicated. A routes file is JSON:
//! either an array of paths or an object keyed by path, which is the shape of
//! a Next.js `exportPathMap`.

use crate::error::{ConfigError, FhrError, RouteError};
use crate::types::RoutePath;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered, de-duplicated route paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<RoutePath>,
    seen: HashSet<RoutePath>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a route set from raw path strings
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Empty` if any path is an empty string.
    pub fn from_paths<I, S>(paths: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for path in paths {
            set.insert(RoutePath::new(path).ok_or(RouteError::Empty)?);
        }
        Ok(set)
    }

    /// Parses a JSON routes document
    pub fn from_json(path: impl Into<PathBuf>, content: &str) -> Result<Self, FhrError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RoutesDocument {
            List(Vec<String>),
            Map(serde_json::Map<String, serde_json::Value>),
        }

        let document: RoutesDocument =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.into(),
                source,
            })?;

        let set = match document {
            RoutesDocument::List(paths) => Self::from_paths(paths)?,
            RoutesDocument::Map(map) => Self::from_paths(map.into_iter().map(|(key, _)| key))?,
        };
        Ok(set)
    }

    /// Loads a JSON routes file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FhrError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_json(path, &content)
    }

    /// Adds a route; returns false if it was already present
    pub fn insert(&mut self, route: RoutePath) -> bool {
        if !self.seen.insert(route.clone()) {
            return false;
        }
        self.routes.push(route);
        true
    }

    /// Appends every route of `other` not already present
    pub fn merge(&mut self, other: RouteSet) {
        for route in other.routes {
            self.insert(route);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoutePath> {
        self.routes.iter()
    }

    /// Routes that contain a dynamic segment
    pub fn dynamic(&self) -> impl Iterator<Item = &RoutePath> {
        self.routes.iter().filter(|route| route.is_dynamic())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a RoutePath;
    type IntoIter = std::slice::Iter<'a, RoutePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(set: &RouteSet) -> Vec<&str> {
        set.iter().map(|route| route.as_str()).collect()
    }

    #[test]
    fn test_from_paths_keeps_order_and_dedups() {
        let set = RouteSet::from_paths(["/b", "/a/[id]", "/b", "/c"]).unwrap();
        assert_eq!(paths(&set), vec!["/b", "/a/[id]", "/c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_from_paths_rejects_empty() {
        assert!(matches!(
            RouteSet::from_paths(["/ok", ""]),
            Err(RouteError::Empty)
        ));
    }

    #[test]
    fn test_dynamic_filter() {
        let set = RouteSet::from_paths(["/", "/post/[id]", "/about", "/[...all]"]).unwrap();
        let dynamic: Vec<&str> = set.dynamic().map(|route| route.as_str()).collect();
        assert_eq!(dynamic, vec!["/post/[id]", "/[...all]"]);
    }

    #[test]
    fn test_from_json_list() {
        let set = RouteSet::from_json("routes.json", r#"["/", "/post/[id]"]"#).unwrap();
        assert_eq!(paths(&set), vec!["/", "/post/[id]"]);
    }

    #[test]
    fn test_from_json_export_path_map() {
        let json = r#"{
            "/": { "page": "/" },
            "/post/[id]": { "page": "/post/[id]" }
        }"#;
        let set = RouteSet::from_json("routes.json", json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dynamic().count(), 1);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = RouteSet::from_json("routes.json", "42");
        assert!(matches!(
            result,
            Err(FhrError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn test_merge() {
        let mut set = RouteSet::from_paths(["/a", "/b"]).unwrap();
        set.merge(RouteSet::from_paths(["/b", "/c"]).unwrap());
        assert_eq!(paths(&set), vec!["/a", "/b", "/c"]);
    }
}
