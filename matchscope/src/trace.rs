use serde::{Deserialize, Serialize};

/// A single character comparison made while testing a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStep {
    /// Position of the compared character in the text
    pub t_index: usize,
    /// The text character at `t_index`
    pub t_char: char,
    /// Position of the compared character in the pattern
    pub p_index: usize,
    /// The pattern character at `p_index`
    pub p_char: char,
    /// Whether the two characters are equal
    pub equal: bool,
}

impl VerificationStep {
    /// Compares `text[window + offset]` against `pattern[offset]`
    pub(crate) fn compare(text: &[char], pattern: &[char], window: usize, offset: usize) -> Self {
        let t_char = text[window + offset];
        let p_char = pattern[offset];
        Self {
            t_index: window + offset,
            t_char,
            p_index: offset,
            p_char,
            equal: t_char == p_char,
        }
    }
}

/// Why a window was recorded without character comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceNote {
    HashMismatch,
}

/// One entry of a window's verification list.
///
/// Serialized untagged, so a comparison renders as the bare step object and
/// the marker renders as `{"note": "hash_mismatch"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationEntry {
    Compared(VerificationStep),
    Marker { note: TraceNote },
}

impl VerificationEntry {
    pub const HASH_MISMATCH: Self = Self::Marker {
        note: TraceNote::HashMismatch,
    };

    pub fn step(&self) -> Option<&VerificationStep> {
        match self {
            Self::Compared(step) => Some(step),
            Self::Marker { .. } => None,
        }
    }
}

/// Trace of one window tested by the naive matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveWindowTrace {
    /// Window offset into the text
    pub window: usize,
    /// Comparisons in pattern order, ending at the first mismatch
    pub verifications: Vec<VerificationStep>,
}

impl NaiveWindowTrace {
    /// True when every pattern character compared equal
    pub fn is_match(&self, pattern_len: usize) -> bool {
        self.verifications.len() == pattern_len && self.verifications.iter().all(|s| s.equal)
    }

    /// The failing comparison, if the window stopped early
    pub fn mismatch(&self) -> Option<&VerificationStep> {
        self.verifications.last().filter(|s| !s.equal)
    }
}

/// Trace of one window tested by the Rabin-Karp matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RabinKarpWindowTrace {
    /// Window offset into the text
    pub window: usize,
    /// Hash of the text window as produced by the rolling update
    pub t_hash: u64,
    /// Hash of the pattern
    pub p_hash: u64,
    /// Verification outcome; `None` when the hashes differed
    pub verified: Option<bool>,
    /// Comparisons made on a hash hit, or a single hash-mismatch marker
    pub verifications: Vec<VerificationEntry>,
}

impl RabinKarpWindowTrace {
    pub fn is_hash_mismatch(&self) -> bool {
        matches!(self.verifications.as_slice(), [VerificationEntry::Marker { .. }])
    }

    /// True when the hashes agreed but the characters did not
    pub fn is_spurious_hit(&self) -> bool {
        self.verified == Some(false)
    }

    pub fn steps(&self) -> impl Iterator<Item = &VerificationStep> {
        self.verifications.iter().filter_map(VerificationEntry::step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_step_compare() {
        let text = chars("abcd");
        let pattern = chars("cx");
        let step = VerificationStep::compare(&text, &pattern, 2, 0);
        assert_eq!(step.t_index, 2);
        assert_eq!(step.p_index, 0);
        assert!(step.equal);

        let step = VerificationStep::compare(&text, &pattern, 2, 1);
        assert_eq!(step.t_char, 'd');
        assert_eq!(step.p_char, 'x');
        assert!(!step.equal);
    }

    #[test]
    fn test_marker_serialization() {
        let json = serde_json::to_value(VerificationEntry::HASH_MISMATCH).unwrap();
        assert_eq!(json, serde_json::json!({ "note": "hash_mismatch" }));
    }

    #[test]
    fn test_step_serialization() {
        let entry = VerificationEntry::Compared(VerificationStep {
            t_index: 3,
            t_char: 'K',
            p_index: 1,
            p_char: 'K',
            equal: true,
        });
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "t_index": 3,
                "t_char": "K",
                "p_index": 1,
                "p_char": "K",
                "equal": true
            })
        );

        let back: VerificationEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_rabin_karp_trace_serializes_null_verified() {
        let trace = RabinKarpWindowTrace {
            window: 0,
            t_hash: 7,
            p_hash: 9,
            verified: None,
            verifications: vec![VerificationEntry::HASH_MISMATCH],
        };
        let json = serde_json::to_value(&trace).unwrap();
        assert!(json["verified"].is_null());
        assert_eq!(json["verifications"][0]["note"], "hash_mismatch");
        assert!(trace.is_hash_mismatch());
        assert!(!trace.is_spurious_hit());
        assert_eq!(trace.steps().count(), 0);
    }

    #[test]
    fn test_naive_trace_queries() {
        let trace = NaiveWindowTrace {
            window: 1,
            verifications: vec![
                VerificationStep {
                    t_index: 1,
                    t_char: 'a',
                    p_index: 0,
                    p_char: 'a',
                    equal: true,
                },
                VerificationStep {
                    t_index: 2,
                    t_char: 'b',
                    p_index: 1,
                    p_char: 'c',
                    equal: false,
                },
            ],
        };
        assert!(!trace.is_match(2));
        assert_eq!(trace.mismatch().map(|s| s.p_index), Some(1));
    }
}
