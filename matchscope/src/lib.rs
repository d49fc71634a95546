pub mod config;
pub mod errors;
pub mod metrics;
pub mod request;
pub mod results;
pub mod search;
pub mod trace;

pub use config::MatchConfig;
pub use errors::{MatchError, MatchResult};
pub use request::MatchRequest;
pub use results::{ComparisonBundle, NaiveOutcome, RabinKarpOutcome};
pub use search::{compare, ComparisonService, HashParams, NaiveMatcher, RabinKarpMatcher};
