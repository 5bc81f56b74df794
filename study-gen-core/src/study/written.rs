use std::collections::HashSet;

use crate::study::cloze::build_cloze;
use crate::study::items::WrittenItem;
use crate::text::NotesAnalysis;

/// Number of keywords considered for fallback written prompts.
pub const WRITTEN_POOL: usize = 100;

/// Prompt asking for a short explanation of `term`.
pub fn explanation_prompt(term: &str) -> String {
	format!("Write a short explanation for: {term}")
}

/// Generates up to `count` written prompts from raw notes.
pub fn generate(text: &str, count: usize) -> Vec<WrittenItem> {
	from_notes(&NotesAnalysis::new(text), count)
}

/// Generates up to `count` written prompts from analysed notes.
///
/// # Behavior
/// - Each sentence with a usable cloze becomes a prompt (the blanked
///   sentence) whose answer is the removed word.
/// - Remaining slots are filled with explanation prompts: slot `i` uses
///   keyword `i` of the pool, or the placeholder term `concept {i+1}`
///   once the pool runs out. The pool does not wrap.
///
/// # Notes
/// - Always returns exactly `count` items.
/// - Draws nothing from the random stream.
pub fn from_notes(notes: &NotesAnalysis, count: usize) -> Vec<WrittenItem> {
	let mut items: Vec<WrittenItem> = Vec::new();
	let mut seen: HashSet<(String, String)> = HashSet::new();

	for sentence in notes.sentences() {
		if items.len() >= count {
			break;
		}
		let cloze = build_cloze(sentence);
		if cloze.is_placeholder() {
			continue;
		}
		if seen.insert((cloze.stem.clone(), cloze.answer.clone())) {
			items.push(WrittenItem::new(cloze.stem, cloze.answer));
		}
	}

	let pool = notes.keyword_pool(WRITTEN_POOL);
	while items.len() < count {
		let index = items.len();
		let term = match pool.get(index) {
			Some(term) => (*term).to_owned(),
			None => format!("concept {}", index + 1),
		};
		items.push(WrittenItem::new(explanation_prompt(&term), term));
	}

	items
}
