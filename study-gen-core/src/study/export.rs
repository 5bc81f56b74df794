use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};
use crate::io::{build_output_path, has_extension};
use crate::study::generator::Preview;
use crate::study::items::{Flashcard, McqItem, WrittenItem};
use crate::study::mcq::MAX_CHOICES;

/// Extension of compact binary archives.
pub const BINARY_EXTENSION: &str = "bin";
/// Extension of JSON archives.
pub const JSON_EXTENSION: &str = "json";

/// Archived study material: the notes, when the set was generated, and
/// the three generated collections.
///
/// # Formats
/// - JSON (camelCase keys) for interchange with other tools; unknown keys
///   are ignored on import.
/// - `postcard` binary for compact archival.
///
/// Both round-trip every field, ids included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudySet {
	pub notes: String,
	pub generated_at: DateTime<Utc>,
	#[serde(default)]
	pub flashcards: Vec<Flashcard>,
	#[serde(default)]
	pub mcq: Vec<McqItem>,
	#[serde(default)]
	pub written: Vec<WrittenItem>,
}

impl StudySet {
	/// Wraps a preview, stamping it with the current time.
	pub fn new(notes: &str, preview: Preview) -> Self {
		Self {
			notes: notes.to_owned(),
			generated_at: Utc::now(),
			flashcards: preview.flashcards,
			mcq: preview.mcq,
			written: preview.written,
		}
	}

	/// The generated collections, without notes or timestamp.
	pub fn preview(&self) -> Preview {
		Preview {
			flashcards: self.flashcards.clone(),
			mcq: self.mcq.clone(),
			written: self.written.clone(),
		}
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Ok(postcard::from_bytes(bytes)?)
	}

	/// Writes the set to `path`: binary for `.bin`, JSON otherwise.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let path = path.as_ref();
		if has_extension(path, BINARY_EXTENSION) {
			fs::write(path, self.to_bytes()?)?;
		} else {
			fs::write(path, self.to_json()?)?;
		}
		log::info!("Saved study set to {}", path.display());
		Ok(())
	}

	/// Reads a set written by [`StudySet::save`] and validates it.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let set = if has_extension(path, BINARY_EXTENSION) {
			Self::from_bytes(&fs::read(path)?)?
		} else {
			Self::from_json(&fs::read_to_string(path)?)?
		};
		set.validate()?;
		Ok(set)
	}

	/// Default archive path for a notes file: same folder and stem, `.json`.
	pub fn export_path<P: AsRef<Path>>(notes_path: P) -> Result<PathBuf> {
		Ok(build_output_path(notes_path, JSON_EXTENSION)?)
	}

	/// Checks multiple-choice items of an imported set.
	///
	/// # Errors
	/// `StudyError::InvalidSet` when a question has no choices, more than
	/// 4 choices, duplicate choices, or a correct answer missing from its
	/// choices.
	pub fn validate(&self) -> Result<()> {
		for (index, item) in self.mcq.iter().enumerate() {
			if item.choices.is_empty() || item.choices.len() > MAX_CHOICES {
				return Err(StudyError::InvalidSet(format!(
					"question {} has {} choices",
					index + 1,
					item.choices.len()
				)));
			}
			let unique: HashSet<&str> = item.choices.iter().map(String::as_str).collect();
			if unique.len() != item.choices.len() {
				return Err(StudyError::InvalidSet(format!("question {} has duplicate choices", index + 1)));
			}
			if !unique.contains(item.correct.as_str()) {
				return Err(StudyError::InvalidSet(format!(
					"question {} does not offer its answer {:?}",
					index + 1,
					item.correct
				)));
			}
		}
		Ok(())
	}
}
