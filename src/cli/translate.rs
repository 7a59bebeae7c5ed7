//! Translate command implementation
//!
//! Prints the rewrite rule each route needs without reading any configuration.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::{FhrError, RouteError};
use crate::rules::PatternTranslator;
use crate::types::RoutePath;
use serde::Serialize;
use std::io::{self, Write};

/// Translation record for JSONL output
#[derive(Debug, Serialize)]
struct TranslationRecord<'a> {
    route: &'a str,
    dynamic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<&'a str>,
}

/// Run the translate command
///
/// # Returns
///
/// Exit code:
/// - 0: Every route translated
/// - 2: A route is empty or has a malformed dynamic segment
pub fn run_translate(routes: &[String], format: OutputFormat) -> i32 {
    let stdout = io::stdout();
    match write_translations(&mut stdout.lock(), routes, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Writes one line per route; stops at the first route that cannot be translated
pub(crate) fn write_translations<W: Write>(
    out: &mut W,
    routes: &[String],
    format: OutputFormat,
) -> Result<(), FhrError> {
    let translator = PatternTranslator::new()?;

    for raw in routes {
        let route = RoutePath::new(raw.as_str()).ok_or(RouteError::Empty)?;
        let rule = if route.is_dynamic() {
            Some(translator.translate(route.as_str())?)
        } else {
            None
        };

        match format {
            OutputFormat::Human => match &rule {
                Some(rule) => writeln!(out, "{} -> {}", route, rule.to_json())?,
                None => writeln!(out, "{} (static, no rewrite needed)", route)?,
            },
            OutputFormat::Jsonl => {
                let record = TranslationRecord {
                    route: route.as_str(),
                    dynamic: rule.is_some(),
                    source: rule.as_ref().map(|r| r.source.as_str()),
                    destination: rule.as_ref().map(|r| r.destination.as_str()),
                };
                let json = serde_json::to_string(&record).map_err(io::Error::other)?;
                writeln!(out, "{}", json)?;
            }
        }
    }

    Ok(())
}
