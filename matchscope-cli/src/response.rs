use matchscope::{ComparisonService, NaiveOutcome, RabinKarpOutcome};
use serde::Serialize;
use std::time::Instant;

/// An algorithm result with the wall-clock time it took, flattened into one
/// JSON object
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    pub outcome: T,
    pub time_ms: f64,
}

impl<T> Timed<T> {
    /// Runs `f` and records its duration in milliseconds
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let outcome = f();
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        Self {
            outcome,
            time_ms: round_ms(elapsed),
        }
    }
}

/// Rounds to six decimal places
fn round_ms(ms: f64) -> f64 {
    (ms * 1e6).round() / 1e6
}

/// JSON response for a single comparison
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub text: String,
    pub pattern: String,
    pub naive: Timed<NaiveOutcome>,
    pub rabin_karp: Timed<RabinKarpOutcome>,
}

impl MatchResponse {
    /// Runs each matcher separately so each gets its own timing
    pub fn timed(service: &ComparisonService, text: &str, pattern: &str) -> Self {
        let text_chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();

        let naive = Timed::measure(|| service.naive().find_chars(&text_chars, &pattern_chars));
        let rabin_karp =
            Timed::measure(|| service.rabin_karp().find_chars(&text_chars, &pattern_chars));

        Self {
            text: text.to_string(),
            pattern: pattern.to_string(),
            naive,
            rabin_karp,
        }
    }

    pub fn agrees(&self) -> bool {
        self.naive.outcome.matches == self.rabin_karp.outcome.matches
    }
}
