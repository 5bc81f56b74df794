use crate::text::matcher::WholeWord;
use crate::text::tokenizer::tokenize;

/// Stem returned when a sentence has no word worth blanking.
pub const CLOZE_PLACEHOLDER: &str = "(Add more detailed notes to generate cloze questions)";

/// Only tokens longer than this are blanked.
pub(crate) const MIN_BLANK_LEN: usize = 3;

/// A fill-in-the-blank sentence and the word that was removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cloze {
	pub stem: String,
	pub answer: String,
}

impl Cloze {
	fn placeholder() -> Self {
		Self { stem: CLOZE_PLACEHOLDER.to_owned(), answer: String::new() }
	}

	/// `true` when no word could be blanked.
	pub fn is_placeholder(&self) -> bool {
		self.answer.is_empty()
	}
}

/// Blanks the first meaningful word of a sentence.
///
/// # Behavior
/// - Tokenizes the sentence and takes the first token longer than
///   3 characters that occurs as a whole word in the sentence.
/// - Replaces its first case-insensitive occurrence with `_____`.
/// - Falls back to the placeholder stem with an empty answer.
pub fn build_cloze(sentence: &str) -> Cloze {
	tokenize(sentence)
		.into_iter()
		.filter(|token| token.len() > MIN_BLANK_LEN)
		.find_map(|token| {
			WholeWord::new(&token)
				.blank(sentence)
				.map(|stem| Cloze { stem, answer: token })
		})
		.unwrap_or_else(Cloze::placeholder)
}
