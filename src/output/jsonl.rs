#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One finding record per finding, in report order
//! 2. One status record

use crate::engine::gate::ValidationReport;
use crate::output::Reporter;
use crate::rules::FindingKind;
use crate::types::RewriteRule;
use serde::Serialize;
use std::io::{self, Write};

/// JSONL output formatter
pub struct JsonlFormatter<W: Write> {
    out: W,
}

impl JsonlFormatter<io::Stdout> {
    /// Creates a formatter writing to stdout
    pub fn stdout() -> Self {
        JsonlFormatter::new(io::stdout())
    }
}

impl<W: Write> JsonlFormatter<W> {
    pub fn new(out: W) -> Self {
        JsonlFormatter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonlFormatter<W> {
    fn report(&mut self, report: &ValidationReport) -> io::Result<()> {
        self.out.write_all(format(report).as_bytes())?;
        self.out.flush()
    }
}

/// Format a report as JSONL
pub fn format(report: &ValidationReport) -> String {
    let mut output = String::new();
    let config = report.config_path.display().to_string();

    for finding in &report.findings {
        let record = FindingRecord {
            record_type: "finding",
            kind: finding.kind(),
            config: &config,
            site: finding.site(),
            route: finding.route().as_str(),
            expected: finding.expected(),
            found: finding
                .found()
                .and_then(|found| serde_json::to_value(found).ok()),
        };
        if let Ok(json) = serde_json::to_string(&record) {
            output.push_str(&json);
            output.push('\n');
        }
    }

    let status = StatusRecord {
        record_type: "status",
        passed: report.passed(),
        config: &config,
        sites: &report.sites,
        routes_checked: report.routes_checked as u64,
        dynamic_routes: report.dynamic_routes as u64,
        findings: report.findings.len() as u64,
    };
    if let Ok(json) = serde_json::to_string(&status) {
        output.push_str(&json);
        output.push('\n');
    }

    output
}

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    kind: FindingKind,
    config: &'a str,
    site: &'a str,
    route: &'a str,
    expected: &'a RewriteRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    found: Option<serde_json::Value>,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    config: &'a str,
    sites: &'a [String],
    routes_checked: u64,
    dynamic_routes: u64,
    findings: u64,
}
