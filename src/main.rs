//! fhr CLI entry point

use clap::Parser;
use fhr::cli::{CheckOptions, Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = fhr::logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let exit_code = match cli.command {
        Command::Check {
            routes,
            sites,
            routes_file,
            dir,
            settings,
            format,
        } => fhr::cli::run_check(&CheckOptions {
            routes,
            sites,
            routes_file,
            dir,
            settings,
            format,
            color: cli.color,
        }),
        Command::Translate { routes, format } => fhr::cli::run_translate(&routes, format),
    };

    process::exit(exit_code);
}
