//! Search over the user directory
//!
//! The synchronous core filters and ranks directory records by fuzzy name
//! match. `SearchClient` wraps it behind a fake remote API: each dispatched
//! query completes on a background thread after a randomized delay in a
//! fixed range, emulating a network round-trip, and reports back over a
//! channel drained by the UI loop.
//!
//! Every dispatch carries a monotonically increasing request id. Responses
//! for anything but the latest issued id are discarded by the controller, so
//! a slow stale search can never overwrite a newer suggestion panel.

use crate::directory::{Directory, User};
use crate::logging;
use crate::matcher::{MatchOptions, Pattern};
use rand::Rng;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A matched record with its score (lower is better)
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub user: User,
    pub score: f64,
}

/// Completed search, delivered over the client channel
#[derive(Debug)]
pub struct SearchResponse {
    pub request_id: u64,
    pub query: String,
    pub hits: Vec<SearchHit>,
}

/// Simulated response delay bounds, milliseconds
#[derive(Debug, Clone, Copy)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    /// Uniform draw from `[min_ms, max_ms)`
    pub fn sample(&self) -> u64 {
        if self.max_ms <= self.min_ms {
            return self.min_ms;
        }
        rand::thread_rng().gen_range(self.min_ms..self.max_ms)
    }
}

/// Rank directory records against `query`, best match first.
///
/// No-match is not an error: an empty vec is a valid result the UI renders
/// as a placeholder. Ties keep directory order.
pub fn search_by_name(directory: &Directory, query: &str, options: &MatchOptions) -> Vec<SearchHit> {
    let pattern = Pattern::new(query, *options);
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = directory
        .users()
        .iter()
        .filter_map(|user| {
            pattern.score(&user.name).map(|score| SearchHit {
                user: user.clone(),
                score,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.score.total_cmp(&b.score));
    hits
}

/// Asynchronous search handle owned by the UI loop
pub struct SearchClient {
    directory: Arc<Directory>,
    options: MatchOptions,
    delay: DelayRange,
    tx: Sender<SearchResponse>,
}

impl SearchClient {
    /// Returns the client and the receiving end the UI loop drains.
    pub fn new(
        directory: Arc<Directory>,
        options: MatchOptions,
        delay: DelayRange,
    ) -> (Self, Receiver<SearchResponse>) {
        let (tx, rx) = channel();
        (
            Self {
                directory,
                options,
                delay,
                tx,
            },
            rx,
        )
    }

    /// Run `query` on a background thread after the simulated delay.
    ///
    /// The thread is detached; there is no cancellation. Sequencing happens
    /// at the receiving side via `request_id`.
    pub fn dispatch(&self, request_id: u64, query: &str) {
        let directory = Arc::clone(&self.directory);
        let options = self.options;
        let delay_ms = self.delay.sample();
        let query = query.to_string();
        let tx = self.tx.clone();

        logging::debug(
            "SEARCH",
            &format!("dispatch #{} query='{}' delay={}ms", request_id, query, delay_ms),
        );

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(delay_ms));
            let hits = search_by_name(&directory, &query, &options);
            let _ = tx.send(SearchResponse {
                request_id,
                query,
                hits,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_directory() -> Directory {
        Directory::generate(42, 100)
    }

    fn options() -> MatchOptions {
        MatchOptions::default()
    }

    mod ranking {
        use super::*;

        #[test]
        fn test_existing_name_is_first_hit() {
            let dir = test_directory();
            let name = dir.users()[0].name.clone();

            let hits = search_by_name(&dir, &name, &options());

            assert!(!hits.is_empty());
            assert_eq!(hits[0].user.name, name);
        }

        #[test]
        fn test_no_match_yields_empty_hits() {
            let dir = test_directory();
            let hits = search_by_name(&dir, "zzzzzz", &options());
            assert!(hits.is_empty());
        }

        #[test]
        fn test_hits_are_ordered_by_ascending_score() {
            let dir = test_directory();
            let hits = search_by_name(&dir, "son", &options());

            assert!(!hits.is_empty());
            for pair in hits.windows(2) {
                assert!(pair[0].score <= pair[1].score);
            }
        }

        #[test]
        fn test_empty_query_yields_no_hits() {
            let dir = test_directory();
            assert!(search_by_name(&dir, "", &options()).is_empty());
        }
    }

    mod delay {
        use super::*;

        #[test]
        fn test_sample_stays_within_bounds() {
            let range = DelayRange {
                min_ms: 200,
                max_ms: 350,
            };
            for _ in 0..1000 {
                let d = range.sample();
                assert!((200..350).contains(&d), "delay {} out of bounds", d);
            }
        }

        #[test]
        fn test_degenerate_range_returns_min() {
            let range = DelayRange { min_ms: 5, max_ms: 5 };
            assert_eq!(range.sample(), 5);
        }
    }

    mod client {
        use super::*;

        #[test]
        fn test_response_round_trips_request_id_and_query() {
            let dir = Arc::new(test_directory());
            let name = dir.users()[0].name.clone();
            let (client, rx) = SearchClient::new(
                Arc::clone(&dir),
                options(),
                DelayRange { min_ms: 0, max_ms: 1 },
            );

            client.dispatch(7, &name);

            let response = rx
                .recv_timeout(Duration::from_secs(5))
                .expect("response should arrive");
            assert_eq!(response.request_id, 7);
            assert_eq!(response.query, name);
            assert_eq!(response.hits[0].user.name, name);
        }
    }
}
