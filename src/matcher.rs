//! Approximate string matching
//!
//! Bitap (shift-or with errors) matcher scoring candidates in `[0, 1]`:
//! 0 is a perfect match at the expected location, 1 a complete mismatch.
//! A candidate matches when its best score stays at or below the configured
//! threshold. The score combines the error rate (`errors / pattern_len`) with
//! a proximity penalty (`|expected - actual| / distance`), so both typos and
//! matches far from the expected location cost tolerance.

use std::collections::HashMap;

/// Bitap masks live in a u64, so a pattern can never exceed this many chars
/// regardless of `max_pattern_length`.
const MAX_PATTERN_BITS: usize = 64;

/// Matching tolerances. All compiled-in; see `AppConfig`.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Maximum acceptable score; lower is stricter
    pub threshold: f64,
    /// Expected match position in the candidate text
    pub location: usize,
    /// How many characters of distance from `location` consume the full
    /// threshold. Zero means "exactly at `location` or nothing".
    pub distance: usize,
    /// Patterns longer than this are truncated
    pub max_pattern_length: usize,
    /// Patterns shorter than this never match
    pub min_match_char_length: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            location: 0,
            distance: 100,
            max_pattern_length: 32,
            min_match_char_length: 1,
        }
    }
}

/// A compiled query pattern.
///
/// Compilation lowercases the query, truncates it to `max_pattern_length`
/// and builds the per-character bit alphabet the bitap scan runs on.
pub struct Pattern {
    chars: Vec<char>,
    alphabet: HashMap<char, u64>,
    options: MatchOptions,
}

impl Pattern {
    pub fn new(query: &str, options: MatchOptions) -> Self {
        let chars: Vec<char> = query
            .chars()
            .flat_map(|c| c.to_lowercase())
            .take(options.max_pattern_length.min(MAX_PATTERN_BITS))
            .collect();

        // alphabet[c] has bit (len - i - 1) set for every position i holding c
        let mut alphabet: HashMap<char, u64> = HashMap::new();
        let len = chars.len();
        for (i, &c) in chars.iter().enumerate() {
            *alphabet.entry(c).or_insert(0) |= 1u64 << (len - i - 1);
        }

        Self {
            chars,
            alphabet,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Best score of this pattern against `text`, or `None` when no
    /// occurrence stays within the threshold.
    pub fn score(&self, text: &str) -> Option<f64> {
        let pattern_len = self.chars.len();
        if pattern_len == 0 || pattern_len < self.options.min_match_char_length {
            return None;
        }

        let text: Vec<char> = text.chars().flat_map(|c| c.to_lowercase()).collect();
        let text_len = text.len();
        if text_len == 0 {
            return None;
        }

        let expected = self.options.location;
        let distance = self.options.distance;
        let mut current_threshold = self.options.threshold;

        // An exact occurrence tightens the threshold before the error scan.
        if let Some(pos) = index_of(&text, &self.chars, expected) {
            current_threshold =
                score_at(0, pos, expected, pattern_len, distance).min(current_threshold);
            if let Some(pos) = last_index_of(&text, &self.chars, expected + pattern_len) {
                current_threshold =
                    score_at(0, pos, expected, pattern_len, distance).min(current_threshold);
            }
        }

        let mask = 1u64 << (pattern_len - 1);
        let mut best_location: Option<usize> = None;
        let mut final_score = 1.0;
        let mut bin_max = pattern_len + text_len;
        let mut last_bit_arr: Vec<u64> = Vec::new();

        let at = |arr: &[u64], idx: usize| arr.get(idx).copied().unwrap_or(0);

        for errors in 0..pattern_len {
            // Widest window around `expected` still under threshold at this
            // error level; shrinks monotonically across iterations.
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if score_at(errors, expected + bin_mid, expected, pattern_len, distance)
                    <= current_threshold
                {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = 1.max(expected as i64 - bin_mid as i64 + 1) as usize;
            let finish = (expected + bin_mid).min(text_len) + pattern_len;

            let mut bit_arr = vec![0u64; finish + 2];
            bit_arr[finish + 1] = (1u64 << errors) - 1;

            let mut j = finish;
            while j >= start {
                let current_location = j - 1;
                let char_match = text
                    .get(current_location)
                    .and_then(|c| self.alphabet.get(c))
                    .copied()
                    .unwrap_or(0);

                // match/extend, then substitution+insertion, then deletion
                bit_arr[j] = ((bit_arr[j + 1] << 1) | 1) & char_match;
                if errors > 0 {
                    bit_arr[j] |= (((at(&last_bit_arr, j + 1) | at(&last_bit_arr, j)) << 1) | 1)
                        | at(&last_bit_arr, j + 1);
                }

                if bit_arr[j] & mask != 0 {
                    let score = score_at(errors, current_location, expected, pattern_len, distance);
                    if score <= current_threshold {
                        current_threshold = score;
                        final_score = score;
                        best_location = Some(current_location);
                        if current_location <= expected {
                            // No better match possible to the left
                            break;
                        }
                        start = 1.max(2 * expected as i64 - current_location as i64) as usize;
                    }
                }

                j -= 1;
            }

            // One more error can no longer beat the current threshold
            if score_at(errors + 1, expected, expected, pattern_len, distance) > current_threshold {
                break;
            }
            last_bit_arr = bit_arr;
        }

        best_location.map(|_| if final_score == 0.0 { 0.001 } else { final_score })
    }
}

fn score_at(
    errors: usize,
    current_location: usize,
    expected_location: usize,
    pattern_len: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = (expected_location as i64 - current_location as i64).unsigned_abs();
    if distance == 0 {
        if proximity > 0 {
            return 1.0;
        }
        return accuracy;
    }
    accuracy + proximity as f64 / distance as f64
}

fn index_of(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    let last = text.len() - pattern.len();
    if from > last {
        return None;
    }
    (from..=last).find(|&i| text[i..i + pattern.len()] == *pattern)
}

fn last_index_of(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    let last = text.len() - pattern.len();
    (0..=from.min(last)).rev().find(|&i| text[i..i + pattern.len()] == *pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(query: &str) -> Pattern {
        Pattern::new(query, MatchOptions::default())
    }

    mod exact {
        use super::*;

        #[test]
        fn test_exact_match_scores_near_zero() {
            let score = pattern("alice abbott").score("Alice Abbott").unwrap();
            assert!(score <= 0.01, "exact match scored {}", score);
        }

        #[test]
        fn test_matching_is_case_insensitive() {
            assert!(pattern("ALICE").score("alice abbott").is_some());
            assert!(pattern("alice").score("ALICE ABBOTT").is_some());
        }

        #[test]
        fn test_substring_matches_with_proximity_penalty() {
            let at_start = pattern("abbott").score("Abbott Alice").unwrap();
            let at_offset = pattern("abbott").score("Alice Abbott").unwrap();
            assert!(at_start < at_offset, "{} !< {}", at_start, at_offset);
        }
    }

    mod tolerance {
        use super::*;

        #[test]
        fn test_small_typo_stays_within_threshold() {
            assert!(pattern("alcie").score("Alice Abbott").is_some());
            assert!(pattern("abbot").score("Alice Abbott").is_some());
        }

        #[test]
        fn test_unrelated_text_is_rejected() {
            assert!(pattern("zzzz").score("Alice Abbott").is_none());
            assert!(pattern("qqqqqq").score("Benjamin Feeney").is_none());
        }

        #[test]
        fn test_zero_threshold_accepts_only_exact_at_location() {
            let options = MatchOptions {
                threshold: 0.0,
                ..MatchOptions::default()
            };
            assert!(Pattern::new("alice", options).score("alice abbott").is_some());
            assert!(Pattern::new("alice", options).score("dr alice abbott").is_none());
        }

        #[test]
        fn test_zero_distance_pins_match_to_location() {
            let options = MatchOptions {
                distance: 0,
                ..MatchOptions::default()
            };
            assert!(Pattern::new("abbott", options).score("abbott alice").is_some());
            assert!(Pattern::new("abbott", options).score("alice abbott").is_none());
        }

        #[test]
        fn test_tighter_distance_rejects_far_matches() {
            let options = MatchOptions {
                distance: 4,
                ..MatchOptions::default()
            };
            // Exact occurrence 13 chars in: proximity alone exceeds the
            // threshold once distance shrinks to 4.
            assert!(Pattern::new("torphy", options).score("maximilian j. torphy").is_none());
            let default = pattern("torphy");
            assert!(default.score("maximilian j. torphy").is_some());
        }
    }

    mod limits {
        use super::*;

        #[test]
        fn test_pattern_is_truncated_to_max_length() {
            let long = "abcdefghijklmnopqrstuvwxyz0123456789";
            let p = pattern(long);
            assert_eq!(p.len(), MatchOptions::default().max_pattern_length);
            // The truncated prefix still matches text starting with it
            assert!(p.score(long).is_some());
        }

        #[test]
        fn test_short_patterns_respect_min_match_length() {
            let options = MatchOptions {
                min_match_char_length: 2,
                ..MatchOptions::default()
            };
            assert!(Pattern::new("a", options).score("alice").is_none());
            assert!(Pattern::new("al", options).score("alice").is_some());
        }

        #[test]
        fn test_empty_pattern_and_empty_text_never_match() {
            assert!(pattern("").score("alice").is_none());
            assert!(pattern("").is_empty());
            assert!(pattern("alice").score("").is_none());
        }
    }
}
