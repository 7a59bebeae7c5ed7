//! Test utilities for fhr integration tests
#![allow(dead_code)]

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Writes a firebase.json with the given contents into `dir`
pub fn write_firebase_json(dir: &std::path::Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("firebase.json");
    std::fs::write(&path, contents).expect("write firebase.json");
    path
}

/// Parses an in-memory firebase.json
pub fn firebase_config(contents: &str) -> fhr::config::FirebaseConfig {
    fhr::config::FirebaseConfig::parse("/project/firebase.json", contents)
        .expect("valid firebase.json")
}

/// Builds site IDs from string literals
pub fn sites(ids: &[&str]) -> Vec<fhr::SiteId> {
    ids.iter()
        .map(|id| fhr::SiteId::new(*id).expect("valid site ID"))
        .collect()
}
