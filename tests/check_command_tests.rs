//! Integration tests for the check command
//!
//! NOTE: These tests change the current directory and use the serial_test attribute
//! to ensure they don't interfere with each other.

use fhr::cli::common::{EXIT_ERROR, EXIT_FAILED, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use fhr::cli::{CheckOptions, ColorChoice, OutputFormat, run_check};
use fhr::types::SiteId;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a project with firebase.json and fhr.toml
fn setup_test_project(dir: &Path) {
    let firebase = r#"{
  "hosting": [
    {
      "site": "main",
      "public": "out",
      "rewrites": [
        {"source": "/post/*", "destination": "/post/[id].html"},
        {"source": "/docs/**", "destination": "/docs/[...slug].html"}
      ]
    },
    {
      "site": "blog",
      "public": "out",
      "rewrites": [
        {"source": "/post/*", "destination": "/index.html"}
      ]
    }
  ]
}
"#;
    fs::write(dir.join("firebase.json"), firebase).unwrap();
    fs::write(dir.join("fhr.toml"), "[fhr]\nsites = [\"main\"]\n").unwrap();
}

fn options(routes: &[&str]) -> CheckOptions {
    CheckOptions {
        routes: routes.iter().map(|r| r.to_string()).collect(),
        sites: Vec::new(),
        routes_file: None,
        dir: PathBuf::from("."),
        settings: None,
        format: Some(OutputFormat::Jsonl),
        color: Some(ColorChoice::Never),
    }
}

/// Runs `f` with the current directory set to `dir`
fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = f();
    std::env::set_current_dir(original_dir).unwrap();
    result
}

#[test]
#[serial]
fn test_check_passes_with_settings_sites() {
    let temp_dir = TempDir::new().unwrap();
    setup_test_project(temp_dir.path());

    let exit_code = in_dir(temp_dir.path(), || {
        run_check(&options(&["/", "/post/[id]", "/docs/[...slug]"]))
    });

    assert_eq!(exit_code, EXIT_SUCCESS);
}

#[test]
#[serial]
fn test_check_cli_sites_override_settings() {
    let temp_dir = TempDir::new().unwrap();
    setup_test_project(temp_dir.path());

    let exit_code = in_dir(temp_dir.path(), || {
        run_check(&CheckOptions {
            sites: vec![SiteId::new("main").unwrap(), SiteId::new("blog").unwrap()],
            ..options(&["/post/[id]"])
        })
    });

    // blog points /post/* at the wrong file
    assert_eq!(exit_code, EXIT_FAILED);
}

#[test]
#[serial]
fn test_check_from_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    setup_test_project(temp_dir.path());
    let nested = temp_dir.path().join("web");
    fs::create_dir_all(&nested).unwrap();

    let exit_code = in_dir(&nested, || {
        run_check(&CheckOptions {
            sites: vec![SiteId::new("main").unwrap()],
            ..options(&["/post/[id]"])
        })
    });

    assert_eq!(exit_code, EXIT_SUCCESS);
}

#[test]
#[serial]
fn test_check_without_sites_is_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("firebase.json"), r#"{"hosting": []}"#).unwrap();

    let exit_code = in_dir(temp_dir.path(), || run_check(&options(&["/post/[id]"])));

    assert_eq!(exit_code, EXIT_ERROR);
}

#[test]
#[serial]
fn test_check_invalid_settings_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    setup_test_project(temp_dir.path());
    fs::write(temp_dir.path().join("fhr.toml"), "[fhr\nsites = ").unwrap();

    let exit_code = in_dir(temp_dir.path(), || run_check(&options(&["/post/[id]"])));

    assert_eq!(exit_code, EXIT_PARSE_ERROR);
}

#[test]
#[serial]
fn test_check_routes_file_relative_to_cwd() {
    let temp_dir = TempDir::new().unwrap();
    setup_test_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("routes.json"),
        r#"["/post/[id]", "/tag/[name]"]"#,
    )
    .unwrap();

    let exit_code = in_dir(temp_dir.path(), || {
        run_check(&CheckOptions {
            routes_file: Some(PathBuf::from("routes.json")),
            ..options(&[])
        })
    });

    // main has no rewrite for /tag/*
    assert_eq!(exit_code, EXIT_FAILED);
}
