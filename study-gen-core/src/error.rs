use thiserror::Error;

use crate::study::config::{MAX_COUNT, MIN_COUNT};

/// Errors raised by configuration, archives and file I/O.
///
/// Text analysis and generation never fail: malformed notes only ever
/// produce shorter collections.
#[derive(Debug, Error)]
pub enum StudyError {
	#[error("Requested count must be between {} and {}, got {0}", MIN_COUNT, MAX_COUNT)]
	InvalidCount(usize),

	#[error("Invalid study set: {0}")]
	InvalidSet(String),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Archive error: {0}")]
	Archive(#[from] postcard::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<StudyError> for String {
	fn from(err: StudyError) -> Self {
		err.to_string()
	}
}

/// Result type alias for study operations
pub type Result<T> = std::result::Result<T, StudyError>;
