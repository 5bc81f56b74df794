use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens of this length or shorter are dropped.
const MIN_TOKEN_LEN: usize = 3;

/// English function words and contractions ignored during tokenization.
///
/// Some entries (dotted abbreviations, curly-quote contractions) can never
/// survive normalization; they are kept so the list reads as one vocabulary.
const STOPWORDS: &[&str] = &[
	"a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
	"its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "we", "you", "your",
	"their", "our", "they", "them", "this", "those", "these", "which", "who", "whom", "whose",
	"than", "then", "so", "if", "or", "nor", "not", "into", "onto", "above", "below", "between",
	"because", "before", "after", "over", "under", "again", "further", "do", "does", "did",
	"doing", "up", "down", "out", "off", "just", "now", "only", "own", "same", "too", "very",
	"can", "cannot", "could", "should", "would", "may", "might", "must", "been", "being", "am",
	"i", "me", "my", "mine", "yourself", "himself", "herself", "itself", "ourselves",
	"yourselves", "themselves", "about", "against", "during", "without", "within", "each",
	"both", "few", "more", "most", "other", "some", "such", "no", "also", "via", "per", "vs",
	"versus", "etc", "e.g", "eg", "i.e", "ie", "let's", "let’s", "‘s", "‘re", "don't", "didn't",
	"won't", "can't", "isn't", "aren't", "wasn't", "weren't", "shouldn't", "couldn't",
	"wouldn't", "i've", "i'll", "i'd", "you're", "you'll", "you'd", "we're", "we'll", "we'd",
	"they're", "they'll", "they'd",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
	LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Returns `true` if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
	STOPWORD_SET.contains(word)
}

/// Splits text into normalized word tokens.
///
/// - Lowercases the input
/// - Replaces anything that is not an ASCII letter, digit, hyphen,
///   apostrophe or whitespace with a space
/// - Splits on whitespace runs
/// - Drops stopwords and tokens of 2 characters or fewer
pub fn tokenize(text: &str) -> Vec<String> {
	let normalized: String = text
		.to_lowercase()
		.chars()
		.map(|c| if is_token_char(c) { c } else { ' ' })
		.collect();

	normalized
		.split_whitespace()
		.filter(|word| word.len() >= MIN_TOKEN_LEN && !is_stopword(word))
		.map(str::to_owned)
		.collect()
}

fn is_token_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '\'' || c.is_whitespace()
}
