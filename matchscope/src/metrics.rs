use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::results::ComparisonBundle;

/// Aggregates counters across many comparisons, e.g. a parallel batch
#[derive(Debug, Clone)]
pub struct ComparisonMetrics {
    comparisons_run: Arc<AtomicU64>,
    windows_scanned: Arc<AtomicU64>,

    // Naive counters
    naive_comparisons: Arc<AtomicU64>,
    naive_matches: Arc<AtomicU64>,

    // Rabin-Karp counters
    hash_comparisons: Arc<AtomicU64>,
    char_comparisons: Arc<AtomicU64>,
    spurious_hits: Arc<AtomicU64>,
    rabin_karp_matches: Arc<AtomicU64>,
}

impl ComparisonMetrics {
    /// Creates a new ComparisonMetrics instance
    pub fn new() -> Self {
        Self {
            comparisons_run: Arc::new(AtomicU64::new(0)),
            windows_scanned: Arc::new(AtomicU64::new(0)),
            naive_comparisons: Arc::new(AtomicU64::new(0)),
            naive_matches: Arc::new(AtomicU64::new(0)),
            hash_comparisons: Arc::new(AtomicU64::new(0)),
            char_comparisons: Arc::new(AtomicU64::new(0)),
            spurious_hits: Arc::new(AtomicU64::new(0)),
            rabin_karp_matches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Folds one finished comparison into the totals
    pub fn record_bundle(&self, bundle: &ComparisonBundle) {
        let naive = &bundle.naive;
        let rk = &bundle.rabin_karp;

        self.comparisons_run.fetch_add(1, Ordering::Relaxed);
        self.windows_scanned
            .fetch_add(naive.windows() as u64, Ordering::Relaxed);
        self.naive_comparisons
            .fetch_add(naive.comparisons as u64, Ordering::Relaxed);
        self.naive_matches
            .fetch_add(naive.matches.len() as u64, Ordering::Relaxed);
        self.hash_comparisons
            .fetch_add(rk.hash_comparisons as u64, Ordering::Relaxed);
        self.char_comparisons
            .fetch_add(rk.char_comparisons as u64, Ordering::Relaxed);
        self.spurious_hits
            .fetch_add(rk.spurious_hits() as u64, Ordering::Relaxed);
        self.rabin_karp_matches
            .fetch_add(rk.matches.len() as u64, Ordering::Relaxed);

        debug!(
            "Recorded comparison: {} windows, naive/rk char comparisons {}/{}",
            naive.windows(),
            naive.comparisons,
            rk.char_comparisons
        );
    }

    /// Gets a snapshot of the current totals
    pub fn get_stats(&self) -> ComparisonStats {
        ComparisonStats {
            comparisons_run: self.comparisons_run.load(Ordering::Relaxed),
            windows_scanned: self.windows_scanned.load(Ordering::Relaxed),
            naive_comparisons: self.naive_comparisons.load(Ordering::Relaxed),
            naive_matches: self.naive_matches.load(Ordering::Relaxed),
            hash_comparisons: self.hash_comparisons.load(Ordering::Relaxed),
            char_comparisons: self.char_comparisons.load(Ordering::Relaxed),
            spurious_hits: self.spurious_hits.load(Ordering::Relaxed),
            rabin_karp_matches: self.rabin_karp_matches.load(Ordering::Relaxed),
        }
    }

    /// Logs the current totals
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Comparison stats:\n\
             Comparisons run: {}\n\
             Windows scanned: {}\n\
             Naive char comparisons: {}\n\
             Rabin-Karp hash/char comparisons: {}/{}\n\
             Spurious hash hits: {}\n\
             Matches (naive/rabin-karp): {}/{}",
            stats.comparisons_run,
            stats.windows_scanned,
            stats.naive_comparisons,
            stats.hash_comparisons,
            stats.char_comparisons,
            stats.spurious_hits,
            stats.naive_matches,
            stats.rabin_karp_matches
        );
    }
}

impl Default for ComparisonMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of [`ComparisonMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    pub comparisons_run: u64,
    pub windows_scanned: u64,
    pub naive_comparisons: u64,
    pub naive_matches: u64,
    pub hash_comparisons: u64,
    pub char_comparisons: u64,
    pub spurious_hits: u64,
    pub rabin_karp_matches: u64,
}
