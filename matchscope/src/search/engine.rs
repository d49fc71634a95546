use rayon::prelude::*;
use std::num::NonZeroUsize;
use tracing::{debug, info};

use super::hash::HashParams;
use super::naive::NaiveMatcher;
use super::rabin_karp::RabinKarpMatcher;
use crate::config::MatchConfig;
use crate::errors::MatchResult;
use crate::metrics::ComparisonMetrics;
use crate::request::MatchRequest;
use crate::results::ComparisonBundle;

/// Runs both matchers over the same input and bundles their results
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonService {
    naive: NaiveMatcher,
    rabin_karp: RabinKarpMatcher,
}

impl ComparisonService {
    /// Creates a service whose Rabin-Karp matcher uses `params`
    pub fn new(params: HashParams) -> MatchResult<Self> {
        Ok(Self {
            naive: NaiveMatcher::new(),
            rabin_karp: RabinKarpMatcher::new(params)?,
        })
    }

    /// Creates a service from the hash settings in `config`
    pub fn from_config(config: &MatchConfig) -> MatchResult<Self> {
        Self::new(config.hash_params()?)
    }

    pub fn hash_params(&self) -> HashParams {
        self.rabin_karp.params()
    }

    pub fn naive(&self) -> &NaiveMatcher {
        &self.naive
    }

    pub fn rabin_karp(&self) -> &RabinKarpMatcher {
        &self.rabin_karp
    }

    /// Compares the two algorithms on one text/pattern pair.
    ///
    /// Each matcher runs on its own; neither sees the other's result.
    pub fn compare(&self, text: &str, pattern: &str) -> ComparisonBundle {
        let text_chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();

        let naive = self.naive.find_chars(&text_chars, &pattern_chars);
        let rabin_karp = self.rabin_karp.find_chars(&text_chars, &pattern_chars);

        ComparisonBundle {
            text: text.to_string(),
            pattern: pattern.to_string(),
            naive,
            rabin_karp,
        }
    }

    pub fn compare_request(&self, request: &MatchRequest) -> ComparisonBundle {
        self.compare(&request.text, &request.pattern)
    }

    /// Compares many requests in parallel, returning bundles in input order
    pub fn compare_batch(
        &self,
        requests: &[MatchRequest],
        thread_count: NonZeroUsize,
    ) -> Vec<ComparisonBundle> {
        let metrics = ComparisonMetrics::new();
        let bundles = self.compare_batch_with_metrics(requests, thread_count, &metrics);
        metrics.log_stats();
        bundles
    }

    /// Like [`compare_batch`](Self::compare_batch), recording into `metrics`
    pub fn compare_batch_with_metrics(
        &self,
        requests: &[MatchRequest],
        thread_count: NonZeroUsize,
        metrics: &ComparisonMetrics,
    ) -> Vec<ComparisonBundle> {
        info!("Starting batch of {} comparisons", requests.len());
        if requests.is_empty() {
            debug!("No requests provided, returning empty batch");
            return Vec::new();
        }

        let chunk_size = (requests.len() / thread_count.get()).clamp(1, 64);
        debug!(
            "Processing batch with {} threads, chunk size {}",
            thread_count, chunk_size
        );

        let bundles: Vec<ComparisonBundle> = requests
            .par_chunks(chunk_size)
            .flat_map_iter(|chunk| {
                chunk.iter().map(|request| {
                    let bundle = self.compare_request(request);
                    metrics.record_bundle(&bundle);
                    bundle
                })
            })
            .collect();

        info!("Batch complete. Ran {} comparisons", bundles.len());
        bundles
    }
}

/// Compares both algorithms on `text` and `pattern` with the default hash
/// parameters (base 256, modulus 101)
pub fn compare(text: &str, pattern: &str) -> ComparisonBundle {
    ComparisonService::default().compare(text, pattern)
}
