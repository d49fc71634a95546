use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

use crate::errors::{MatchError, MatchResult};
use crate::results::ComparisonBundle;

/// A text/pattern pair as received at the boundary.
///
/// Missing fields default to empty strings, which the matchers treat as
/// "no windows" rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pattern: String,
}

impl MatchRequest {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

/// Parses newline-delimited JSON requests. Blank lines are skipped; line
/// numbers in errors are 1-based.
pub fn parse_requests(reader: impl BufRead) -> MatchResult<Vec<MatchRequest>> {
    let mut requests = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = serde_json::from_str(&line)
            .map_err(|e| MatchError::invalid_request(index + 1, e))?;
        requests.push(request);
    }
    Ok(requests)
}

/// Reads newline-delimited JSON requests from `path`
pub fn read_requests(path: &Path) -> MatchResult<Vec<MatchRequest>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MatchError::file_not_found(path),
        _ => MatchError::IoError(e),
    })?;
    let requests = parse_requests(BufReader::new(file))?;
    debug!("Read {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Writes one compact JSON bundle per line
pub fn write_bundles(mut writer: impl Write, bundles: &[ComparisonBundle]) -> MatchResult<()> {
    for bundle in bundles {
        serde_json::to_writer(&mut writer, bundle)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
