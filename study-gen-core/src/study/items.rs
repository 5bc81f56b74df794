use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A two-sided card: a term on the front, what the notes say on the back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
	pub id: Uuid,
	pub front: String,
	pub back: String,
}

impl Flashcard {
	pub fn new(front: String, back: String) -> Self {
		Self { id: Uuid::new_v4(), front, back }
	}

	/// Identity used for deduplication (ids excluded).
	pub fn key(&self) -> (&str, &str) {
		(&self.front, &self.back)
	}
}

/// A multiple-choice question.
///
/// # Invariants
/// - `choices` contains `correct` exactly once
/// - `choices` has no duplicates and at most 4 entries
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct McqItem {
	pub id: Uuid,
	pub stem: String,
	pub correct: String,
	pub choices: Vec<String>,
}

impl McqItem {
	pub fn new(stem: String, correct: String, choices: Vec<String>) -> Self {
		Self { id: Uuid::new_v4(), stem, correct, choices }
	}

	/// Identity used for deduplication (ids excluded).
	///
	/// Choices are compared as a set, so the same question with its
	/// options in another order has the same key.
	pub fn key(&self) -> (&str, &str, Vec<&str>) {
		let mut choices: Vec<&str> = self.choices.iter().map(String::as_str).collect();
		choices.sort_unstable();
		(&self.stem, &self.correct, choices)
	}
}

/// A written-recall prompt. `answer` may be empty when no confident
/// answer exists (only ever the case for imported sets).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WrittenItem {
	pub id: Uuid,
	pub prompt: String,
	pub answer: String,
}

impl WrittenItem {
	pub fn new(prompt: String, answer: String) -> Self {
		Self { id: Uuid::new_v4(), prompt, answer }
	}

	pub fn key(&self) -> (&str, &str) {
		(&self.prompt, &self.answer)
	}
}

/// Capitalizes the first letter of every space- or hyphen-separated word.
///
/// Example: `"light-dependent reactions"` → `"Light-Dependent Reactions"`
pub fn title_case(term: &str) -> String {
	let mut out = String::with_capacity(term.len());
	let mut at_word_start = true;
	for c in term.chars() {
		if at_word_start {
			out.extend(c.to_uppercase());
		} else {
			out.push(c);
		}
		at_word_start = c == ' ' || c == '-';
	}
	out
}
