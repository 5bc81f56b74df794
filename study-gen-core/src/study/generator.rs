use serde::{Deserialize, Serialize};

use crate::rng::Mulberry32;
use crate::study::config::GenerationConfig;
use crate::study::items::{Flashcard, McqItem, WrittenItem};
use crate::study::{flashcards, mcq, written};
use crate::text::NotesAnalysis;

/// The three collections generated from one set of notes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Preview {
	pub flashcards: Vec<Flashcard>,
	pub mcq: Vec<McqItem>,
	pub written: Vec<WrittenItem>,
}

impl Preview {
	/// Returns `true` when no collection holds an item.
	pub fn is_empty(&self) -> bool {
		self.flashcards.is_empty() && self.mcq.is_empty() && self.written.is_empty()
	}
}

/// Runs the whole generation pipeline.
///
/// # Parameters
/// - `notes`: free-form text; surrounding whitespace is ignored.
/// - `config`: item count per collection and random seed.
///
/// # Returns
/// Flashcards, multiple-choice questions and written prompts, each at
/// most `config.count()` long.
///
/// # Behavior
/// - Blank notes short-circuit to an empty preview; nothing is analysed.
/// - The notes are analysed once and a fresh `Mulberry32` is seeded from
///   `config.seed()`. That single stream feeds flashcards first, then
///   multiple-choice questions (written prompts draw nothing).
///
/// # Notes
/// - Same notes and config give the same items, ids aside.
pub fn preview(notes: &str, config: &GenerationConfig) -> Preview {
	let trimmed = notes.trim();
	if trimmed.is_empty() {
		return Preview::default();
	}

	let analysis = NotesAnalysis::new(trimmed);
	let mut rng = Mulberry32::new(config.seed());
	let count = config.count();

	let preview = Preview {
		flashcards: flashcards::from_notes(&analysis, count, &mut rng),
		mcq: mcq::from_notes(&analysis, count, &mut rng),
		written: written::from_notes(&analysis, count),
	};

	log::debug!(
		"Generated {} flashcards, {} questions, {} prompts from {} sentences / {} keywords (seed {})",
		preview.flashcards.len(),
		preview.mcq.len(),
		preview.written.len(),
		analysis.sentences().len(),
		analysis.keywords().len(),
		config.seed()
	);

	preview
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blank_notes() {
		for notes in ["", "   ", "\n\t "] {
			let preview = preview(notes, &GenerationConfig::default());
			assert!(preview.is_empty());
		}
	}

	#[test]
	fn test_count_bound() {
		let notes = crate::study::SAMPLE_NOTES;
		for count in [1, 3, 10, 50] {
			let config = GenerationConfig::new(count, 9).unwrap();
			let preview = preview(notes, &config);
			assert!(preview.flashcards.len() <= count);
			assert!(preview.mcq.len() <= count);
			assert_eq!(preview.written.len(), count);
		}
	}

	#[test]
	fn test_stream_is_shared_in_order() {
		let notes = "Photosynthesis converts light into energy. Chlorophyll absorbs light.";
		let config = GenerationConfig::new(3, 21).unwrap();
		let preview = preview(notes, &config);

		let analysis = NotesAnalysis::new(notes);
		let mut rng = Mulberry32::new(21);
		let cards = flashcards::from_notes(&analysis, 3, &mut rng);
		let questions = mcq::from_notes(&analysis, 3, &mut rng);

		let fronts = |cards: &[Flashcard]| cards.iter().map(|c| (c.front.clone(), c.back.clone())).collect::<Vec<_>>();
		assert_eq!(fronts(preview.flashcards.as_slice()), fronts(cards.as_slice()));
		let choices = |items: &[McqItem]| items.iter().map(|q| q.choices.clone()).collect::<Vec<_>>();
		assert_eq!(choices(preview.mcq.as_slice()), choices(questions.as_slice()));
	}
}
