#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Each finding is rendered as a block naming the hosting entry, the route,
//! and the exact JSON to add or replace in the configuration file.

use crate::config::settings::ColorOption;
use crate::engine::gate::ValidationReport;
use crate::output::Reporter;
use crate::rules::Finding;
use std::io::{self, IsTerminal};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter writing to a (possibly colored) stream
pub struct HumanFormatter<W: WriteColor> {
    out: W,
}

impl HumanFormatter<StandardStream> {
    /// Creates a formatter writing to stderr
    pub fn stderr(color: ColorOption) -> Self {
        HumanFormatter::new(StandardStream::stderr(color_choice(
            color,
            io::stderr().is_terminal(),
        )))
    }
}

impl<W: WriteColor> HumanFormatter<W> {
    pub fn new(out: W) -> Self {
        HumanFormatter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_finding(&mut self, finding: &Finding, file_name: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        writeln!(
            self.out,
            "REWRITE RULE ERROR @ {}/hosting/[site=\"{}\"]",
            file_name,
            finding.site()
        )?;
        self.out.reset()?;

        match finding {
            Finding::MissingRule {
                route, expected, ..
            } => {
                writeln!(self.out, "Missing rewrite rule for site path '{}'.", route)?;
                writeln!(
                    self.out,
                    "Include the following rewrite rule in {}:",
                    file_name
                )?;
                writeln!(self.out)?;
                self.write_snippet(&expected.to_json(), Color::Green)?;
            }
            Finding::IncorrectDestination {
                route,
                found,
                expected,
                ..
            } => {
                writeln!(self.out, "Incorrect rewrite rule for site path '{}'.", route)?;
                writeln!(self.out, "In {} replace:", file_name)?;
                writeln!(self.out)?;
                self.write_snippet(&found.to_json(), Color::Yellow)?;
                writeln!(self.out)?;
                writeln!(self.out, "with")?;
                writeln!(self.out)?;
                self.write_snippet(&expected.to_json(), Color::Green)?;
            }
        }

        writeln!(self.out)
    }

    fn write_snippet(&mut self, json: &str, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(self.out, "{}", json)?;
        self.out.reset()
    }

    fn write_summary(&mut self, report: &ValidationReport) -> io::Result<()> {
        if report.passed() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(self.out, "[PASS] Firebase Hosting Rules are OK!")?;
        } else {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(
                self.out,
                "[FAIL] {} rewrite rule problem(s) for {} dynamic route(s) in '{}'",
                report.findings.len(),
                report.dynamic_routes,
                report.config_path.display()
            )?;
        }
        self.out.reset()?;
        self.out.flush()
    }
}

impl<W: WriteColor> Reporter for HumanFormatter<W> {
    fn report(&mut self, report: &ValidationReport) -> io::Result<()> {
        let file_name = report.config_file_name();
        for finding in &report.findings {
            self.write_finding(finding, &file_name)?;
        }
        self.write_summary(report)
    }
}

/// Maps the configured color option onto termcolor, disabling color off-terminal
pub fn color_choice(option: ColorOption, is_terminal: bool) -> ColorChoice {
    match option {
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
        ColorOption::Auto if is_terminal => ColorChoice::Auto,
        ColorOption::Auto => ColorChoice::Never,
    }
}
