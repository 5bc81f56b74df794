use std::sync::LazyLock;

use regex::Regex;

// Literal patterns, cannot fail to compile
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits text into trimmed, non-empty sentences.
///
/// # Behavior
/// - Each run of newlines is treated as a single space.
/// - A sentence ends after `.`, `!` or `?` when followed by whitespace;
///   the punctuation stays attached to the sentence.
/// - Text without terminal punctuation yields a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
	let flattened = NEWLINES.replace_all(text, " ").into_owned();

	let mut sentences = Vec::new();
	let mut start = 0;
	for boundary in BOUNDARY.find_iter(&flattened) {
		// Punctuation is one ASCII byte
		sentences.push(&flattened[start..boundary.start() + 1]);
		start = boundary.end();
	}
	sentences.push(&flattened[start..]);

	sentences
		.into_iter()
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_owned)
		.collect()
}
