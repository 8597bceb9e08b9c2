//! Synthetic user directory
//!
//! A fixed, fabricated list of name/email records serving as the search
//! corpus. Generated once at process start from a fixed seed and read-only
//! afterward, so every run of the program sees the same directory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// A single directory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// The process-wide read-only record list
#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<User>,
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Benjamin", "Carmen", "Derek", "Elena", "Felix", "Gloria", "Hector", "Ingrid",
    "Jonas", "Katherine", "Leonard", "Miriam", "Nathan", "Olivia", "Patrick", "Quentin", "Rosa",
    "Samuel", "Teresa", "Ulysses", "Valerie", "Wendell", "Yvonne",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bergstrom", "Considine", "Dickinson", "Emmerich", "Feeney", "Gleichner", "Hartmann",
    "Jacobson", "Kertzmann", "Langworth", "McCullough", "Nikolaus", "Okuneva", "Prosacco",
    "Quitzon", "Reichert", "Schamberger", "Torphy", "Upton", "VonRueden", "Wilderman", "Yundt",
    "Zulauf",
];

const MAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

impl Directory {
    /// Generate `count` records from `seed`. Same inputs, same directory.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut users = Vec::with_capacity(count);
        let mut taken_emails: HashSet<String> = HashSet::with_capacity(count);

        for _ in 0..count {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let domain = MAIL_DOMAINS[rng.gen_range(0..MAIL_DOMAINS.len())];

            let name = format!("{} {}", first, last);
            let email = unique_email(first, last, domain, &mut taken_emails);

            users.push(User { name, email });
        }

        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Derive a collision-free address from the generated name.
fn unique_email(first: &str, last: &str, domain: &str, taken: &mut HashSet<String>) -> String {
    let base = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
    let mut email = format!("{}@{}", base, domain);
    let mut n = 1;
    while !taken.insert(email.clone()) {
        n += 1;
        email = format!("{}{}@{}", base, n, domain);
    }
    email
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: u64 = 42;

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = Directory::generate(TEST_SEED, 100);
        let b = Directory::generate(TEST_SEED, 100);
        assert_eq!(a.users(), b.users());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Directory::generate(TEST_SEED, 100);
        let b = Directory::generate(TEST_SEED + 1, 100);
        assert_ne!(a.users(), b.users());
    }

    #[test]
    fn test_generates_requested_count() {
        let dir = Directory::generate(TEST_SEED, 100);
        assert_eq!(dir.len(), 100);
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_records_are_well_formed() {
        let dir = Directory::generate(TEST_SEED, 100);
        for user in dir.users() {
            assert!(!user.name.is_empty());
            assert!(user.name.contains(' '), "name should be first + last: {}", user.name);
            let (local, domain) = user.email.split_once('@').expect("email must contain @");
            assert!(!local.is_empty());
            assert!(MAIL_DOMAINS.contains(&domain), "unknown domain: {}", domain);
        }
    }

    #[test]
    fn test_emails_are_unique() {
        let dir = Directory::generate(TEST_SEED, 100);
        let unique: HashSet<&str> = dir.users().iter().map(|u| u.email.as_str()).collect();
        assert_eq!(unique.len(), dir.len());
    }
}
