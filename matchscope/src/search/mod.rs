//! Substring matching with instrumentation.
//!
//! Two strategies are provided over the same window model. A window is a
//! candidate offset `i` in `0..=n - m` where the pattern is aligned against
//! `text[i..i + m]`.
//!
//! - [`NaiveMatcher`] compares every window character by character.
//! - [`RabinKarpMatcher`] keeps a rolling hash of the current window and only
//!   compares characters when it equals the pattern hash. Equal hashes do not
//!   imply a match, so every hash hit is verified.
//!
//! Both report the matched offsets, their comparison counters and a trace
//! with one record per window. [`ComparisonService`] runs the two side by
//! side on the same input:
//!
//! ```rust
//! let bundle = matchscope::compare("GEEKSFORGEEKS", "GEEK");
//! assert_eq!(bundle.naive.matches, vec![0, 8]);
//! assert_eq!(bundle.rabin_karp.matches, vec![0, 8]);
//! ```
//!
//! An empty pattern, or one longer than the text, yields no windows: empty
//! matches, zero counters and an empty trace. Nothing in this module returns
//! an error once a matcher has been built.
pub mod engine;
pub mod hash;
pub mod naive;
pub mod rabin_karp;

pub use engine::{compare, ComparisonService};
pub use hash::{HashParams, RollingHash};
pub use naive::NaiveMatcher;
pub use rabin_karp::RabinKarpMatcher;
