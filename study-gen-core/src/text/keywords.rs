use indexmap::IndexMap;

use super::tokenizer::tokenize;

/// A distinct token and how many times it occurs in the notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
	pub term: String,
	pub frequency: usize,
}

/// Ranks tokens by frequency.
///
/// # Behavior
/// - Counts every distinct token of the stream.
/// - Sorts by descending frequency. The sort is stable over first
///   appearance, so ties keep the order in which terms were first seen.
///
/// # Notes
/// - The ranking is complete; callers cap it themselves.
pub fn rank_keywords<I, S>(tokens: I) -> Vec<Keyword>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut counts: IndexMap<String, usize> = IndexMap::new();
	for token in tokens {
		*counts.entry(token.into()).or_insert(0) += 1;
	}
	counts.sort_by(|_, a, _, b| b.cmp(a));

	counts
		.into_iter()
		.map(|(term, frequency)| Keyword { term, frequency })
		.collect()
}

/// Extracts at most `max` keyword terms from raw text, most frequent first.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
	rank_keywords(tokenize(text))
		.into_iter()
		.take(max)
		.map(|keyword| keyword.term)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rank_by_frequency_then_first_seen() {
		let ranked = rank_keywords(["beta", "alpha", "gamma", "alpha", "gamma", "delta"]);
		let terms: Vec<&str> = ranked.iter().map(|k| k.term.as_str()).collect();
		assert_eq!(terms, vec!["alpha", "gamma", "beta", "delta"]);
		assert_eq!(ranked[0].frequency, 2);
		assert_eq!(ranked[3].frequency, 1);
	}

	#[test]
	fn test_extract_caps_result() {
		let text = "Light energy. Light absorbs. Chlorophyll absorbs light. Glucose stores energy.";
		assert_eq!(extract_keywords(text, 3), vec!["light", "energy", "absorbs"]);
		assert_eq!(extract_keywords(text, 100).len(), 6);
		assert!(extract_keywords(text, 0).is_empty());
	}

	#[test]
	fn test_extract_from_stopwords_only() {
		assert!(extract_keywords("The and of it is to.", 10).is_empty());
	}
}
