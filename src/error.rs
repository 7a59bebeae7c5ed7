//! Error types for fhr
//!
//! Errors are grouped by concern: locating and parsing configuration,
//! translating route patterns, and the site-selection / summary failures
//! raised by the gate. `FhrError` composes all of them.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file was not found in the directory or any parent
    #[error("{file_name} not found looking through directories from {} to the root.", .start.display())]
    NotFound { file_name: String, start: PathBuf },

    /// A JSON document could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The configuration parsed but has no `hosting` section
    #[error("The config {} does not contain a \"hosting\" section. Add it and run this again.", .path.display())]
    MissingHosting { path: PathBuf },

    /// fhr.toml is not valid TOML or does not match the expected shape
    #[error("Failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// fhr.toml parsed but holds an invalid value
    #[error("Invalid settings: {0}")]
    Validation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Route pattern errors
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A bracketed segment starts with `.` but is not a trailing slug
    #[error(
        "Dynamic path '{route}' section should not start with . (e.g. [.name]) except for slugs at the end (i.e. [...name]). Check https://nextjs.org/docs/routing/dynamic-routes for more details."
    )]
    InvalidDynamicSegment { route: String },

    /// An empty string was supplied as a route
    #[error("Route paths must not be empty")]
    Empty,

    /// One of the translation patterns failed to compile
    #[error("Invalid translation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Site selection and validation outcome errors
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// No sites were requested
    #[error(
        "In order for this to work provide a list of sites to check for rewrites in the firebase.json hosting section."
    )]
    NoSitesRequested,

    /// None of the requested sites has a hosting entry
    #[error(
        "The following sites were provided as parameter ({}), but no hosting entries with matching site were found.",
        .requested.join(", ")
    )]
    NoMatchingSites { requested: Vec<String> },

    /// Only some of the requested sites resolved to a hosting entry
    #[error(
        "The following sites were provided as parameter ({}), but only ({}) were found. Missing: ({}).",
        .requested.join(", "),
        .found.join(", "),
        .missing.join(", ")
    )]
    IncompleteSites {
        requested: Vec<String>,
        found: Vec<String>,
        missing: Vec<String>,
    },

    /// Every requested site matched, but not exactly once each
    #[error(
        "The following sites were provided as parameter ({}), but the matching hosting entries were ({}). Each site must be requested once and match exactly one hosting entry.",
        .requested.join(", "),
        .found.join(", ")
    )]
    AmbiguousSites {
        requested: Vec<String>,
        found: Vec<String>,
    },

    /// At least one rewrite rule is missing or points at the wrong file
    #[error("One or more rewrite rules missing or erroneous in '{}'.", .config_path.display())]
    RulesFailed { config_path: PathBuf, findings: usize },
}

/// Top-level error type for fhr
#[derive(Debug, thiserror::Error)]
pub enum FhrError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route pattern error
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// Site selection or validation failure
    #[error("{0}")]
    Gate(#[from] GateError),

    /// Failed to write diagnostics
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_sites_lists_found_and_missing() {
        let err = GateError::IncompleteSites {
            requested: vec!["a".to_string(), "b".to_string()],
            found: vec!["a".to_string()],
            missing: vec!["b".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("(a, b)"));
        assert!(msg.contains("only (a)"));
        assert!(msg.contains("Missing: (b)"));
    }

    #[test]
    fn test_not_found_names_start_directory() {
        let err = ConfigError::NotFound {
            file_name: "firebase.json".to_string(),
            start: PathBuf::from("/work/app"),
        };
        assert_eq!(
            err.to_string(),
            "firebase.json not found looking through directories from /work/app to the root."
        );
    }

    #[test]
    fn test_structural_error_names_route() {
        let err = RouteError::InvalidDynamicSegment {
            route: "/post/[.bad]".to_string(),
        };
        assert!(err.to_string().contains("'/post/[.bad]'"));
        assert!(err.to_string().contains("except for slugs at the end"));
    }

    #[test]
    fn test_error_hierarchy() {
        let err: FhrError = GateError::NoSitesRequested.into();
        assert!(matches!(err, FhrError::Gate(GateError::NoSitesRequested)));

        let err: FhrError = RouteError::Empty.into();
        assert!(err.to_string().starts_with("Route error:"));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: FhrError = io.into();
        assert!(matches!(err, FhrError::Io(_)));
    }
}
