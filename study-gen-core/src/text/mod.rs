//! Text analysis for the generators.
//!
//! - Tokenization and stopword filtering (`tokenizer`)
//! - Sentence segmentation (`sentences`)
//! - Frequency-ranked keywords (`keywords`)
//! - The shared case-insensitive whole-word primitive (`matcher`)
//!
//! `NotesAnalysis` bundles the sentences and the full keyword ranking so
//! a single pass over the notes can feed every generator.

pub mod keywords;
pub mod matcher;
pub mod sentences;
pub mod tokenizer;

use keywords::{rank_keywords, Keyword};
use sentences::split_sentences;
use tokenizer::tokenize;

/// Sentences and ranked keywords of one set of notes.
///
/// # Invariants
/// - `keywords` holds every distinct token, most frequent first, ties in
///   first-seen order. A pool of `max` terms is always a prefix of it.
#[derive(Debug, Clone)]
pub struct NotesAnalysis {
	sentences: Vec<String>,
	keywords: Vec<Keyword>,
}

impl NotesAnalysis {
	/// Analyses `text` once: sentence split plus keyword ranking.
	pub fn new(text: &str) -> Self {
		Self {
			sentences: split_sentences(text),
			keywords: rank_keywords(tokenize(text)),
		}
	}

	pub fn sentences(&self) -> &[String] {
		&self.sentences
	}

	/// Full ranking with frequencies.
	pub fn keywords(&self) -> &[Keyword] {
		&self.keywords
	}

	/// The top `max` keyword terms.
	pub fn keyword_pool(&self, max: usize) -> Vec<&str> {
		self.keywords
			.iter()
			.take(max)
			.map(|keyword| keyword.term.as_str())
			.collect()
	}

	/// Returns `true` when no usable keyword was found.
	pub fn is_empty(&self) -> bool {
		self.keywords.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use keywords::extract_keywords;

	#[test]
	fn test_pool_is_prefix_of_extraction() {
		let text = "Stomata regulate gas exchange. Stomata open at dawn. Gas flows in.";
		let analysis = NotesAnalysis::new(text);
		for max in [0, 1, 2, 5, 80] {
			let pool: Vec<String> = analysis.keyword_pool(max).into_iter().map(str::to_owned).collect();
			assert_eq!(pool, extract_keywords(text, max));
		}
		assert_eq!(analysis.sentences().len(), 3);
	}

	#[test]
	fn test_empty_analysis() {
		let analysis = NotesAnalysis::new("It is so.");
		assert!(analysis.is_empty());
		assert_eq!(analysis.sentences(), ["It is so."]);
	}
}
