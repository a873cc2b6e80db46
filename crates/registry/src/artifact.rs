//! Persisted artifact line format.
//!
//! One artifact per service, UTF-8 text, one record per line:
//! `<provider> # <priority>`. Whitespace around the separator is ignored on
//! read; on write exactly one space precedes and follows the `#`.

use std::fmt::Write as _;

use thiserror::Error;

use crate::record::ServiceRecord;

const SEPARATOR: char = '#';

/// Errors raised while parsing a persisted artifact.
///
/// A parse error invalidates the remainder of that one artifact; other
/// services' artifacts are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtifactError {
	/// A non-blank line has no `#` separator.
	#[error("line {line}: missing '#' separator")]
	MissingSeparator {
		/// 1-based line number within the artifact.
		line: usize,
	},
	/// The priority field is not an integer.
	#[error("line {line}: invalid priority '{value}'")]
	InvalidPriority {
		/// 1-based line number within the artifact.
		line: usize,
		/// The offending field, already trimmed.
		value: String,
	},
}

/// Parses one artifact line into a `(provider, priority)` pair.
///
/// `line` is the 1-based line number, used only for error attribution.
/// Blank lines parse to `None`.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<(String, i32)>, ArtifactError> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Ok(None);
	}
	let Some((provider, priority)) = raw.split_once(SEPARATOR) else {
		return Err(ArtifactError::MissingSeparator { line });
	};
	let provider = provider.trim();
	let priority = priority.trim();
	match priority.parse::<i32>() {
		Ok(priority) => Ok(Some((provider.to_string(), priority))),
		Err(_) => Err(ArtifactError::InvalidPriority {
			line,
			value: priority.to_string(),
		}),
	}
}

/// Renders records, in the order given, to artifact text.
pub fn render_artifact<'a>(records: impl IntoIterator<Item = &'a ServiceRecord>) -> String {
	let mut out = String::new();
	for record in records {
		// Writing to a String cannot fail.
		let _ = writeln!(out, "{} {SEPARATOR} {}", record.provider, record.priority);
	}
	out
}
