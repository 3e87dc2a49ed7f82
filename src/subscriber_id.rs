//! Subscriber identifiers and their collision-checked generator.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::FocusError;

/// Length of generated ids unless configured otherwise.
pub const DEFAULT_ID_LENGTH: usize = 5;

/// Consecutive collisions tolerated before the generator grows the id by one letter.
const MAX_ATTEMPTS_PER_LENGTH: usize = 32;

/// Opaque identifier of a registered subscriber.
///
/// Ids are short runs of ASCII lowercase letters, e.g. `"qzkfa"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(String);

impl SubscriberId {
    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubscriberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SubscriberId {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(FocusError::InvalidId {
                input: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

/// Random id source that never hands out the same id twice.
///
/// Every issued id is remembered, including ids of subscribers that have since
/// deregistered, so a stale handle can never alias a newcomer.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    rng: StdRng,
    length: usize,
    issued: HashSet<SubscriberId>,
}

impl IdGenerator {
    pub(crate) fn new(length: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            length,
            issued: HashSet::new(),
        }
    }

    /// Draw ids until one has never been issued before.
    ///
    /// After `MAX_ATTEMPTS_PER_LENGTH` collisions in a row the id length grows,
    /// so the loop terminates even when every id of the current length is used.
    pub(crate) fn next_unused(&mut self) -> SubscriberId {
        let mut attempts = 0;
        loop {
            let candidate = self.draw();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            attempts += 1;
            tracing::trace!(id = %candidate, attempts, "subscriber id collision");
            if attempts >= MAX_ATTEMPTS_PER_LENGTH {
                self.length += 1;
                attempts = 0;
                tracing::debug!(length = self.length, "growing subscriber id length");
            }
        }
    }

    fn draw(&mut self) -> SubscriberId {
        let id = (0..self.length)
            .map(|_| char::from(self.rng.gen_range(b'a'..=b'z')))
            .collect();
        SubscriberId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id: SubscriberId = "abcde".parse().unwrap();
        assert_eq!(id.as_str(), "abcde");
        assert_eq!(id.to_string(), "abcde");
    }

    #[test]
    fn test_parse_rejects_empty_and_foreign_chars() {
        for input in ["", "ABCDE", "ab1de", "ab de", "ábc"] {
            let result: Result<SubscriberId, _> = input.parse();
            assert_eq!(
                result.unwrap_err(),
                FocusError::InvalidId {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_generated_ids_are_lowercase_with_configured_length() {
        let mut generator = IdGenerator::new(DEFAULT_ID_LENGTH, Some(7));
        for _ in 0..50 {
            let id = generator.next_unused();
            assert_eq!(id.as_str().len(), DEFAULT_ID_LENGTH);
            assert!(id.as_str().bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = IdGenerator::new(5, Some(42));
        let mut b = IdGenerator::new(5, Some(42));
        for _ in 0..10 {
            assert_eq!(a.next_unused(), b.next_unused());
        }
    }

    #[test]
    fn test_never_repeats_an_id() {
        let mut generator = IdGenerator::new(1, Some(1));
        let mut seen = HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(generator.next_unused()));
        }
    }

    #[test]
    fn test_grows_length_when_exhausted() {
        let mut generator = IdGenerator::new(1, Some(3));
        let ids: Vec<_> = (0..27).map(|_| generator.next_unused()).collect();
        // Only 26 one-letter ids exist.
        assert!(ids.iter().any(|id| id.as_str().len() >= 2));
    }
}
