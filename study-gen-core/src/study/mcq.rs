use std::collections::HashSet;

use crate::rng::Mulberry32;
use crate::study::cloze::MIN_BLANK_LEN;
use crate::study::items::McqItem;
use crate::text::matcher::WholeWord;
use crate::text::tokenizer::tokenize;
use crate::text::NotesAnalysis;

/// Number of keywords considered for multiple-choice questions.
pub const MCQ_POOL: usize = 60;

/// Upper bound of choices per question (correct answer included).
pub const MAX_CHOICES: usize = 4;

/// Fallback attempts per requested item before giving up on finding
/// a structurally new question.
const FALLBACK_ATTEMPTS: usize = 4;

/// Stem of a question synthesized from a keyword alone.
pub fn fallback_stem(term: &str) -> String {
	format!("Which term best completes the idea related to “{term}”?")
}

/// Generates up to `count` questions from raw notes.
pub fn generate(text: &str, count: usize, rng: &mut Mulberry32) -> Vec<McqItem> {
	from_notes(&NotesAnalysis::new(text), count, rng)
}

/// Generates up to `count` questions from analysed notes.
///
/// # Behavior
/// - For each sentence, the first token that is both a pool keyword and
///   longer than 3 characters is blanked out of the sentence to form the
///   stem. Sentences without such a token are skipped.
/// - Choices are the correct term plus up to 3 other pool terms picked
///   after a seeded shuffle, shuffled again together.
/// - Short on questions and the pool holds at least 4 terms: keyword-only
///   questions are synthesized by cycling through the pool.
///
/// # Notes
/// - Choices size is `min(4, pool size)`; never padded.
/// - Identical questions (same stem, answer and set of choices) are
///   dropped, whatever the order of the choices.
pub fn from_notes(notes: &NotesAnalysis, count: usize, rng: &mut Mulberry32) -> Vec<McqItem> {
	let pool = notes.keyword_pool(MCQ_POOL);
	if pool.is_empty() || count == 0 {
		return Vec::new();
	}
	let members: HashSet<&str> = pool.iter().copied().collect();

	let mut quiz = Quiz::default();
	for sentence in notes.sentences() {
		if quiz.items.len() >= count {
			break;
		}
		let blanked = tokenize(sentence)
			.into_iter()
			.filter(|token| token.len() > MIN_BLANK_LEN && members.contains(token.as_str()))
			.find_map(|token| WholeWord::new(&token).blank(sentence).map(|stem| (token, stem)));
		let Some((correct, stem)) = blanked else {
			continue;
		};
		let choices = build_choices(&correct, &pool, rng);
		quiz.push(McqItem::new(stem, correct, choices));
	}

	if pool.len() >= MAX_CHOICES {
		let offset = quiz.items.len();
		let mut attempt = 0;
		while quiz.items.len() < count && attempt < count * FALLBACK_ATTEMPTS {
			let term = pool[(offset + attempt) % pool.len()];
			let choices = build_choices(term, &pool, rng);
			quiz.push(McqItem::new(fallback_stem(term), term.to_owned(), choices));
			attempt += 1;
		}
	}

	quiz.items
}

/// Correct term plus up to `MAX_CHOICES - 1` distractors, shuffled.
pub(crate) fn build_choices(correct: &str, pool: &[&str], rng: &mut Mulberry32) -> Vec<String> {
	let mut distractors: Vec<&str> = pool.iter().copied().filter(|term| *term != correct).collect();
	rng.shuffle(&mut distractors);
	distractors.truncate(MAX_CHOICES - 1);

	let mut choices: Vec<String> = Vec::with_capacity(MAX_CHOICES);
	for term in std::iter::once(correct).chain(distractors) {
		if !choices.iter().any(|choice| choice == term) {
			choices.push(term.to_owned());
		}
	}
	rng.shuffle(&mut choices);
	choices
}

#[derive(Default)]
struct Quiz {
	items: Vec<McqItem>,
	seen: HashSet<(String, String, Vec<String>)>,
}

impl Quiz {
	fn push(&mut self, item: McqItem) {
		let (stem, correct, choices) = item.key();
		let key = (stem.to_owned(), correct.to_owned(), choices.into_iter().map(str::to_owned).collect());
		if self.seen.insert(key) {
			self.items.push(item);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NOTES: &str = "Photosynthesis converts light into energy. Chlorophyll absorbs light.";

	fn assert_valid(item: &McqItem) {
		assert_eq!(item.choices.iter().filter(|c| **c == item.correct).count(), 1);
		let unique: HashSet<&String> = item.choices.iter().collect();
		assert_eq!(unique.len(), item.choices.len());
		assert!((1..=MAX_CHOICES).contains(&item.choices.len()));
	}

	#[test]
	fn test_questions_from_sentences() {
		let items = generate(NOTES, 2, &mut Mulberry32::new(1));
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].stem, "_____ converts light into energy.");
		assert_eq!(items[0].correct, "photosynthesis");
		assert_eq!(items[1].stem, "_____ absorbs light.");
		assert_eq!(items[1].correct, "chlorophyll");
		for item in &items {
			assert_valid(item);
			assert_eq!(item.choices.len(), 4);
		}
	}

	#[test]
	fn test_fallback_fills_up() {
		let items = generate(NOTES, 6, &mut Mulberry32::new(2));
		assert_eq!(items.len(), 6);
		assert!(items[2..].iter().all(|item| item.stem.starts_with("Which term")));
		for item in &items {
			assert_valid(item);
			assert_eq!(item.stem.contains(&item.correct), item.stem.starts_with("Which term"));
		}
	}

	#[test]
	fn test_small_pool_has_no_fallback() {
		let items = generate("The cat sat.", 5, &mut Mulberry32::new(1));
		assert!(items.len() < 5);
		for item in &items {
			assert_valid(item);
			assert!(item.choices.len() < 4);
		}
	}

	#[test]
	fn test_choices_limited_by_pool() {
		// Pool: "gravity", "pulls"
		let items = generate("Gravity pulls.", 3, &mut Mulberry32::new(4));
		assert_eq!(items.len(), 1);
		assert_eq!(items[0].choices.len(), 2);
		assert_valid(&items[0]);
	}

	#[test]
	fn test_no_duplicate_items() {
		// One sentence question plus one keyword-only question per pool term
		let items = generate("Magnets attract iron filings.", 50, &mut Mulberry32::new(11));
		let keys: HashSet<(&str, &str, Vec<&str>)> = items.iter().map(McqItem::key).collect();
		assert_eq!(keys.len(), items.len());
		assert_eq!(items.len(), 5);
	}

	#[test]
	fn test_reordered_choices_are_duplicates() {
		for seed in [1, 2, 3] {
			let items = generate("Magnets attract iron filings.", 50, &mut Mulberry32::new(seed));
			let stems: HashSet<&str> = items.iter().map(|item| item.stem.as_str()).collect();
			assert_eq!(stems.len(), items.len());
		}

		let mut quiz = Quiz::default();
		let choices = |order: [&str; 3]| order.iter().map(|c| c.to_string()).collect::<Vec<_>>();
		quiz.push(McqItem::new("Q".into(), "a".into(), choices(["a", "b", "c"])));
		quiz.push(McqItem::new("Q".into(), "a".into(), choices(["c", "a", "b"])));
		quiz.push(McqItem::new("Q".into(), "b".into(), choices(["c", "a", "b"])));
		assert_eq!(quiz.items.len(), 2);
	}
}
