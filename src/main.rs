//! Typeahead CLI
//!
//! Starts the terminal autocomplete widget. There is no functional
//! configuration surface; dataset size, seed, delay bounds and matching
//! tolerances are compiled in.

mod tui;

use clap::Parser;
use typeahead::{logging, AppConfig};

/// Typeahead - fuzzy name autocomplete in the terminal
///
/// Type to search a fixed synthetic user directory. Results arrive after a
/// simulated network delay and are selectable by keyboard or mouse.
#[derive(Parser)]
#[command(name = "typeahead")]
#[command(author = "Typeahead Contributors")]
#[command(version)]
#[command(about = "Fuzzy name autocomplete in the terminal", long_about = None)]
struct Cli {
    /// Write debug output to typeahead.log next to the executable
    #[arg(long)]
    log: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.log {
        logging::init();
    }

    let config = AppConfig::default();
    logging::info("MAIN", &format!("starting with {:?}", config));

    if let Err(e) = tui::run(config) {
        logging::error("MAIN", &format!("fatal: {}", e));
        logging::flush();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    logging::flush();
}
