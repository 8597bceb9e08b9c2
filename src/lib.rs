//! Typeahead - fuzzy name autocomplete for the terminal
//!
//! An autocomplete text input over a fixed synthetic user directory: every
//! keystroke fuzzy-matches the query against 100 generated name/email records
//! and offers the hits in a keyboard-navigable suggestion panel.
//!
//! # Features
//!
//! - **Deterministic directory**: fixed-seed generation, identical across runs
//! - **Bitap fuzzy matching**: edit-distance style scoring with configurable
//!   threshold, expected location and distance tolerances
//! - **Simulated latency**: each search completes after a randomized delay on
//!   a background thread, like a network round-trip would
//! - **Request sequencing**: responses carry request ids, so a slow stale
//!   search can never overwrite a newer suggestion panel
//!
//! # Example
//!
//! ```no_run
//! use typeahead::{search_by_name, AppConfig, Directory};
//!
//! let config = AppConfig::default();
//! let directory = Directory::generate(config.directory_seed, config.directory_size);
//!
//! for hit in search_by_name(&directory, "alice", &config.match_options) {
//!     println!("{} <{}>", hit.user.name, hit.user.email);
//! }
//! ```

pub mod directory;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod search;

// Re-export main types
pub use directory::{Directory, User};
pub use error::{Result, TypeaheadError};
pub use matcher::{MatchOptions, Pattern};
pub use search::{search_by_name, DelayRange, SearchClient, SearchHit, SearchResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
///
/// There is no runtime configuration surface; these are the compiled-in
/// constants the widget runs with.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Number of synthetic user records to generate
    pub directory_size: usize,
    /// Seed for the directory generator
    pub directory_seed: u64,
    /// Simulated response delay bounds, milliseconds
    pub delay: DelayRange,
    /// Fuzzy matching tolerances
    pub match_options: MatchOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory_size: 100,
            directory_seed: 42,
            delay: DelayRange {
                min_ms: 200,
                max_ms: 350,
            },
            match_options: MatchOptions::default(),
        }
    }
}
