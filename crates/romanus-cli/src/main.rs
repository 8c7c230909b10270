//! Romanus CLI - Convert Roman numerals to integers

mod cli;

use clap::Parser;
use romanus::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logs go to stderr; stdout stays reserved for the prompt and results
    let (level, format) = cli_args.logging_settings();
    if let Err(e) = init_logging(Some(&level), Some(&format)) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut app = cli::RomanusApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
