use serde::{Deserialize, Serialize};

use crate::trace::{NaiveWindowTrace, RabinKarpWindowTrace};

/// Result of running the naive matcher over one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveOutcome {
    /// Window offsets that matched, in ascending order
    pub matches: Vec<usize>,
    /// Total character comparisons performed
    pub comparisons: usize,
    /// One trace entry per window tested
    pub steps: Vec<NaiveWindowTrace>,
}

impl NaiveOutcome {
    /// Creates an empty outcome (no windows tested)
    pub fn new() -> Self {
        Default::default()
    }

    /// Records a finished window
    pub fn add_window(&mut self, trace: NaiveWindowTrace, matched: bool) {
        self.comparisons += trace.verifications.len();
        if matched {
            self.matches.push(trace.window);
        }
        self.steps.push(trace);
    }

    pub fn windows(&self) -> usize {
        self.steps.len()
    }
}

/// Result of running the Rabin-Karp matcher over one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RabinKarpOutcome {
    /// Window offsets that matched, in ascending order
    pub matches: Vec<usize>,
    /// Number of window hashes compared against the pattern hash
    pub hash_comparisons: usize,
    /// Character comparisons performed while verifying hash hits
    pub char_comparisons: usize,
    /// One trace entry per window tested
    pub steps: Vec<RabinKarpWindowTrace>,
}

impl RabinKarpOutcome {
    /// Creates an empty outcome (no windows tested)
    pub fn new() -> Self {
        Default::default()
    }

    /// Records a finished window
    pub fn add_window(&mut self, trace: RabinKarpWindowTrace) {
        self.hash_comparisons += 1;
        self.char_comparisons += trace.steps().count();
        if trace.verified == Some(true) {
            self.matches.push(trace.window);
        }
        self.steps.push(trace);
    }

    /// Windows whose hash equalled the pattern hash without a real match
    pub fn spurious_hits(&self) -> usize {
        self.steps.iter().filter(|s| s.is_spurious_hit()).count()
    }

    pub fn windows(&self) -> usize {
        self.steps.len()
    }
}

/// Both algorithms' results for the same text and pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonBundle {
    pub text: String,
    pub pattern: String,
    pub naive: NaiveOutcome,
    pub rabin_karp: RabinKarpOutcome,
}

impl ComparisonBundle {
    /// True when both algorithms reported the same match offsets
    pub fn agrees(&self) -> bool {
        self.naive.matches == self.rabin_karp.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{VerificationEntry, VerificationStep};

    fn step(t_index: usize, p_index: usize, equal: bool) -> VerificationStep {
        VerificationStep {
            t_index,
            t_char: 'a',
            p_index,
            p_char: if equal { 'a' } else { 'b' },
            equal,
        }
    }

    #[test]
    fn test_naive_outcome_new() {
        let outcome = NaiveOutcome::new();
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.comparisons, 0);
        assert_eq!(outcome.windows(), 0);
    }

    #[test]
    fn test_naive_outcome_add_window() {
        let mut outcome = NaiveOutcome::new();
        outcome.add_window(
            NaiveWindowTrace {
                window: 0,
                verifications: vec![step(0, 0, true), step(1, 1, false)],
            },
            false,
        );
        outcome.add_window(
            NaiveWindowTrace {
                window: 1,
                verifications: vec![step(1, 0, true), step(2, 1, true)],
            },
            true,
        );

        assert_eq!(outcome.matches, vec![1]);
        assert_eq!(outcome.comparisons, 4);
        assert_eq!(outcome.windows(), 2);
    }

    #[test]
    fn test_rabin_karp_outcome_add_window() {
        let mut outcome = RabinKarpOutcome::new();
        outcome.add_window(RabinKarpWindowTrace {
            window: 0,
            t_hash: 3,
            p_hash: 5,
            verified: None,
            verifications: vec![VerificationEntry::HASH_MISMATCH],
        });
        outcome.add_window(RabinKarpWindowTrace {
            window: 1,
            t_hash: 5,
            p_hash: 5,
            verified: Some(false),
            verifications: vec![VerificationEntry::Compared(step(1, 0, false))],
        });
        outcome.add_window(RabinKarpWindowTrace {
            window: 2,
            t_hash: 5,
            p_hash: 5,
            verified: Some(true),
            verifications: vec![VerificationEntry::Compared(step(2, 0, true))],
        });

        assert_eq!(outcome.hash_comparisons, 3);
        assert_eq!(outcome.char_comparisons, 2);
        assert_eq!(outcome.matches, vec![2]);
        assert_eq!(outcome.spurious_hits(), 1);
    }

    #[test]
    fn test_bundle_serialization_shape() {
        let bundle = ComparisonBundle {
            text: "abc".to_string(),
            pattern: String::new(),
            naive: NaiveOutcome::new(),
            rabin_karp: RabinKarpOutcome::new(),
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "abc",
                "pattern": "",
                "naive": { "matches": [], "comparisons": 0, "steps": [] },
                "rabin_karp": {
                    "matches": [],
                    "hash_comparisons": 0,
                    "char_comparisons": 0,
                    "steps": []
                }
            })
        );
        assert!(bundle.agrees());
    }
}
