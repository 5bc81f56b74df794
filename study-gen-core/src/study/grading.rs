use std::sync::LazyLock;

use regex::Regex;

use crate::study::items::{McqItem, WrittenItem};

// Literal pattern, cannot fail to compile
static NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9 ]+").unwrap());

/// Answer words of this length or shorter do not count as hits.
const MIN_HIT_LEN: usize = 3;

/// Something a learner can answer with free text.
pub trait Gradable {
	/// Returns `true` if `response` is an acceptable answer.
	fn grade(&self, response: &str) -> bool;

	/// The answer shown after a miss.
	fn expected(&self) -> &str;
}

impl Gradable for McqItem {
	fn grade(&self, response: &str) -> bool {
		response == self.correct
	}

	fn expected(&self) -> &str {
		&self.correct
	}
}

impl Gradable for WrittenItem {
	fn grade(&self, response: &str) -> bool {
		check_written(response, &self.answer)
	}

	fn expected(&self) -> &str {
		&self.answer
	}
}

/// Lenient comparison of a typed answer against the expected one.
///
/// # Behavior
/// - Both sides are lowercased, every run of characters outside
///   `[a-z0-9 ]` becomes one space, and the result is trimmed.
/// - An empty expected answer never matches.
/// - Equal normalized strings match.
/// - Otherwise the expected words longer than 2 characters are searched
///   in the response (substring match); at least half of them, and at
///   least one, must be found.
pub fn check_written(response: &str, answer: &str) -> bool {
	let expected = normalize(answer);
	let given = normalize(response);
	if expected.is_empty() {
		return false;
	}
	if expected == given {
		return true;
	}

	let words: Vec<&str> = expected.split_whitespace().filter(|w| w.len() >= MIN_HIT_LEN).collect();
	let hits = words.iter().filter(|word| given.contains(**word)).count();
	hits >= words.len().div_ceil(2).max(1)
}

fn normalize(text: &str) -> String {
	NOISE.replace_all(&text.to_lowercase(), " ").trim().to_owned()
}
