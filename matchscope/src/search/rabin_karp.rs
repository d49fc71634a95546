use tracing::{debug, trace};

use super::hash::{HashParams, RollingHash};
use super::naive::verify_window;
use crate::errors::MatchResult;
use crate::results::RabinKarpOutcome;
use crate::trace::{RabinKarpWindowTrace, VerificationEntry};

/// Rolling-hash matcher. Windows whose hash equals the pattern hash are
/// verified character by character; all others are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarpMatcher {
    params: HashParams,
}

impl RabinKarpMatcher {
    /// Creates a matcher after validating `params`
    pub fn new(params: HashParams) -> MatchResult<Self> {
        Ok(Self {
            params: params.validate()?,
        })
    }

    pub fn params(&self) -> HashParams {
        self.params
    }

    /// Finds all occurrences of `pattern` in `text`
    pub fn find(&self, text: &str, pattern: &str) -> RabinKarpOutcome {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.find_chars(&text, &pattern)
    }

    /// Same as [`find`](Self::find) on already-decoded characters
    pub fn find_chars(&self, text: &[char], pattern: &[char]) -> RabinKarpOutcome {
        let (n, m) = (text.len(), pattern.len());
        let mut outcome = RabinKarpOutcome::new();
        if m == 0 || m > n {
            debug!("Rabin-Karp: no windows to test (n={}, m={})", n, m);
            return outcome;
        }

        let hash = RollingHash::new(self.params, m);
        let p_hash = hash.of(pattern);
        let mut t_hash = hash.of(&text[..m]);
        let last = n - m;

        for window in 0..=last {
            let trace = if t_hash == p_hash {
                let (checked, matched) = verify_window(text, pattern, window);
                trace!(
                    "Rabin-Karp: window {} hash hit ({}), verified={}",
                    window,
                    t_hash,
                    matched
                );
                RabinKarpWindowTrace {
                    window,
                    t_hash,
                    p_hash,
                    verified: Some(matched),
                    verifications: checked
                        .verifications
                        .into_iter()
                        .map(VerificationEntry::Compared)
                        .collect(),
                }
            } else {
                trace!(
                    "Rabin-Karp: window {} hash mismatch ({} != {})",
                    window,
                    t_hash,
                    p_hash
                );
                RabinKarpWindowTrace {
                    window,
                    t_hash,
                    p_hash,
                    verified: None,
                    verifications: vec![VerificationEntry::HASH_MISMATCH],
                }
            };
            outcome.add_window(trace);

            if window < last {
                t_hash = hash.roll(t_hash, text[window], text[window + m]);
            }
        }

        debug!(
            "Rabin-Karp: {} matches, {} hash comparisons, {} char comparisons, {} spurious hits",
            outcome.matches.len(),
            outcome.hash_comparisons,
            outcome.char_comparisons,
            outcome.spurious_hits()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> RabinKarpMatcher {
        RabinKarpMatcher::default()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_finds_all_occurrences() {
        let outcome = matcher().find("GEEKSFORGEEKS", "GEEK");
        assert_eq!(outcome.matches, vec![0, 8]);
        assert_eq!(outcome.hash_comparisons, 10);
    }

    #[test]
    fn test_rolled_hashes_match_direct_hashes() {
        let text = chars("ABABABA");
        let outcome = matcher().find("ABABABA", "ABA");
        assert_eq!(outcome.matches, vec![0, 2, 4]);

        let hash = RollingHash::new(HashParams::default(), 3);
        assert_eq!(outcome.steps.len(), 5);
        for step in &outcome.steps {
            assert_eq!(step.t_hash, hash.of(&text[step.window..step.window + 3]));
            assert_eq!(step.p_hash, hash.of(&chars("ABA")));
        }
    }

    #[test]
    fn test_hash_mismatch_marker() {
        let outcome = matcher().find("ABABABA", "ABA");
        // "BAB" windows hash differently from "ABA"
        let skipped = &outcome.steps[1];
        assert_ne!(skipped.t_hash, skipped.p_hash);
        assert_eq!(skipped.verified, None);
        assert_eq!(skipped.verifications, vec![VerificationEntry::HASH_MISMATCH]);
        assert_eq!(outcome.char_comparisons, 9);
    }

    #[test]
    fn test_spurious_hit_is_verified_and_rejected() {
        // With modulus 1 every window collides with the pattern
        let matcher = RabinKarpMatcher::new(HashParams::new(256, 1)).unwrap();
        let outcome = matcher.find("abcab", "ab");
        assert_eq!(outcome.matches, vec![0, 3]);
        assert_eq!(outcome.hash_comparisons, 4);
        assert_eq!(outcome.spurious_hits(), 2);
        // windows 1 ("bc") and 2 ("ca") fail on the first character
        assert_eq!(outcome.char_comparisons, 2 + 1 + 1 + 2);
        assert!(outcome.steps.iter().all(|s| s.verified.is_some()));
    }

    #[test]
    fn test_default_modulus_collision() {
        // Search for a two-character window that collides with "ab" under the defaults
        let hash = RollingHash::new(HashParams::default(), 2);
        let target = hash.of(&chars("ab"));
        let collider = (0u32..0x800)
            .filter_map(char::from_u32)
            .flat_map(|a| ['x', 'y', 'z'].map(|b| [a, b]))
            .find(|w| w != &['a', 'b'] && hash.of(w) == target)
            .unwrap();
        let text: String = collider.iter().chain(['a', 'b'].iter()).collect();

        let outcome = matcher().find(&text, "ab");
        assert_eq!(outcome.matches, vec![2]);
        assert_eq!(outcome.steps[0].verified, Some(false));
        assert!(outcome.steps[0].is_spurious_hit());
    }

    #[test]
    fn test_empty_pattern() {
        let outcome = matcher().find("anything", "");
        assert_eq!(outcome, RabinKarpOutcome::new());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let outcome = matcher().find("ab", "abc");
        assert_eq!(outcome.hash_comparisons, 0);
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(RabinKarpMatcher::new(HashParams::new(256, 0)).is_err());
    }
}
