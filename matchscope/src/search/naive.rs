use tracing::{debug, trace};

use crate::results::NaiveOutcome;
use crate::trace::{NaiveWindowTrace, VerificationStep};

/// Brute-force matcher: tests every window character by character
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatcher;

impl NaiveMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Finds all occurrences of `pattern` in `text`
    pub fn find(&self, text: &str, pattern: &str) -> NaiveOutcome {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.find_chars(&text, &pattern)
    }

    /// Same as [`find`](Self::find) on already-decoded characters
    pub fn find_chars(&self, text: &[char], pattern: &[char]) -> NaiveOutcome {
        let (n, m) = (text.len(), pattern.len());
        let mut outcome = NaiveOutcome::new();
        if m == 0 || m > n {
            debug!("Naive: no windows to test (n={}, m={})", n, m);
            return outcome;
        }

        for window in 0..=n - m {
            let (trace, matched) = verify_window(text, pattern, window);
            trace!(
                "Naive: window {} made {} comparisons, matched={}",
                window,
                trace.verifications.len(),
                matched
            );
            outcome.add_window(trace, matched);
        }

        debug!(
            "Naive: {} matches, {} comparisons over {} windows",
            outcome.matches.len(),
            outcome.comparisons,
            outcome.windows()
        );
        outcome
    }
}

/// Compares `pattern` against the window at `window`, stopping at the first
/// mismatch. Shared with the Rabin-Karp verification path.
pub(crate) fn verify_window(
    text: &[char],
    pattern: &[char],
    window: usize,
) -> (NaiveWindowTrace, bool) {
    let mut verifications = Vec::with_capacity(pattern.len());
    let mut matched = true;
    for offset in 0..pattern.len() {
        let step = VerificationStep::compare(text, pattern, window, offset);
        verifications.push(step);
        if !step.equal {
            matched = false;
            break;
        }
    }
    (
        NaiveWindowTrace {
            window,
            verifications,
        },
        matched,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_all_occurrences() {
        let outcome = NaiveMatcher::new().find("GEEKSFORGEEKS", "GEEK");
        assert_eq!(outcome.matches, vec![0, 8]);
        assert_eq!(outcome.windows(), 10);
    }

    #[test]
    fn test_short_circuit_counts() {
        let outcome = NaiveMatcher::new().find("aaaaab", "aaab");
        assert_eq!(outcome.matches, vec![2]);
        assert_eq!(outcome.comparisons, 12);
        let per_window: Vec<usize> = outcome
            .steps
            .iter()
            .map(|s| s.verifications.len())
            .collect();
        assert_eq!(per_window, vec![4, 4, 4]);
    }

    #[test]
    fn test_first_character_mismatch_counts_once() {
        let outcome = NaiveMatcher::new().find("xyz", "a");
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.comparisons, 3);
        assert!(outcome.steps.iter().all(|s| s.verifications.len() == 1));
    }

    #[test]
    fn test_empty_pattern() {
        let outcome = NaiveMatcher::new().find("anything", "");
        assert_eq!(outcome, NaiveOutcome::new());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let outcome = NaiveMatcher::new().find("ab", "abc");
        assert_eq!(outcome, NaiveOutcome::new());
    }

    #[test]
    fn test_whole_text_match() {
        let outcome = NaiveMatcher::new().find("same", "same");
        assert_eq!(outcome.matches, vec![0]);
        assert_eq!(outcome.comparisons, 4);
        assert!(outcome.steps[0].is_match(4));
    }

    #[test]
    fn test_overlapping_matches() {
        let outcome = NaiveMatcher::new().find("aaaa", "aa");
        assert_eq!(outcome.matches, vec![0, 1, 2]);
    }

    #[test]
    fn test_multibyte_characters_index_by_char() {
        let outcome = NaiveMatcher::new().find("héllo héllo", "éll");
        assert_eq!(outcome.matches, vec![1, 7]);
        let hit = &outcome.steps[1];
        assert_eq!(hit.verifications[0].t_char, 'é');
        assert_eq!(hit.verifications[0].t_index, 1);
    }

    #[test]
    fn test_trace_ordering() {
        let outcome = NaiveMatcher::new().find("abcabdabc", "abc");
        for window in &outcome.steps {
            for (expected, step) in window.verifications.iter().enumerate() {
                assert_eq!(step.p_index, expected);
                assert_eq!(step.t_index, window.window + expected);
            }
            let failures = window.verifications.iter().filter(|s| !s.equal).count();
            assert!(failures <= 1);
            if failures == 1 {
                assert!(!window.verifications.last().unwrap().equal);
            }
        }
    }
}
