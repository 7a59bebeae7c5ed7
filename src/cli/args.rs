//! CLI argument parsing using clap

use crate::config::settings;
use crate::types::SiteId;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for fhr commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormat> for settings::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => settings::OutputFormat::Human,
            OutputFormat::Jsonl => settings::OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for settings::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => settings::ColorOption::Auto,
            ColorChoice::Always => settings::ColorOption::Always,
            ColorChoice::Never => settings::ColorOption::Never,
        }
    }
}

/// fhr CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "fhr")]
#[command(about = "Check that every dynamic export route has a Firebase Hosting rewrite")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (defaults to fhr.toml, then auto)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available fhr subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every dynamic route has a matching rewrite for each site
    Check {
        /// Routes produced by the export
        routes: Vec<String>,

        /// Hosting site to check (repeatable; defaults to fhr.toml)
        #[arg(short, long = "site", value_name = "SITE", value_parser = parse_site)]
        sites: Vec<SiteId>,

        /// JSON file with the routes: an array, or an object keyed by route
        #[arg(long, value_name = "FILE")]
        routes_file: Option<PathBuf>,

        /// Project directory; firebase.json is searched from here upward
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Settings file (defaults to fhr.toml in --dir)
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Output format (defaults to fhr.toml, then human)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print the rewrite rule each route needs
    Translate {
        /// Routes to translate
        #[arg(required = true)]
        routes: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}

fn parse_site(value: &str) -> Result<SiteId, String> {
    SiteId::new(value).ok_or_else(|| format!("invalid site ID '{}'", value))
}
