//! Parsing for firebase.json hosting sections
//!
//! Only the parts of the document this tool checks are modelled: the
//! `hosting` list, each entry's `site`, and its `rewrites`. Every other
//! field is ignored.

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The parsed contents of firebase.json
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FirebaseJson {
    /// Hosting entries, one per site
    ///
    /// firebase.json allows a single object for single-site projects; it is
    /// read as a one-element list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub hosting: Option<Vec<HostingEntry>>,
}

/// One site's block in the hosting section
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HostingEntry {
    /// Site identifier
    #[serde(default)]
    pub site: Option<String>,

    /// Rewrite rules in declaration order
    #[serde(default)]
    pub rewrites: Vec<HostingRewrite>,
}

impl HostingEntry {
    /// Returns the entry's site identifier, if any
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Returns the first rewrite whose source equals `source`
    pub fn find_rewrite(&self, source: &str) -> Option<&HostingRewrite> {
        self.rewrites
            .iter()
            .find(|rewrite| rewrite.source.as_deref() == Some(source))
    }
}

/// A rewrite as written in firebase.json
///
/// Besides `{source, destination}` pairs, hosting rewrites may target
/// functions or Cloud Run services, or match by `regex`. Those keys are kept
/// so a reported rule renders exactly as configured.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostingRewrite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HostingRewrite {
    /// Renders the rewrite as a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A firebase.json document together with the path it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseConfig {
    pub path: PathBuf,
    pub document: FirebaseJson,
}

impl FirebaseConfig {
    /// Load and parse firebase.json from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse firebase.json content; `path` is only used for messages
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ConfigError> {
        let path = path.into();
        let document: FirebaseJson =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(FirebaseConfig { path, document })
    }

    /// Returns the hosting entries, failing if the section is absent
    pub fn hosting(&self) -> Result<&[HostingEntry], ConfigError> {
        self.document
            .hosting
            .as_deref()
            .ok_or_else(|| ConfigError::MissingHosting {
                path: self.path.clone(),
            })
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<HostingEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<HostingEntry>),
        One(HostingEntry),
    }

    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
            OneOrMany::Many(entries) => entries,
            OneOrMany::One(entry) => vec![entry],
        }),
    )
}
