use regex::{NoExpand, Regex, RegexBuilder};

/// Marker replacing the hidden word in cloze and multiple-choice stems.
pub const BLANK: &str = "_____";

/// Case-insensitive whole-word matcher for a single term.
///
/// The term is escaped before being turned into a pattern, so terms
/// carrying regex metacharacters (`-`, `'`, ...) match literally.
/// An ASCII word boundary is required on both sides of the term, so a
/// letter outside `[0-9A-Za-z_]` (an accented one, say) ends a word.
#[derive(Debug, Clone)]
pub struct WholeWord {
	term: String,
	pattern: Option<Regex>,
}

impl WholeWord {
	/// Compiles a matcher for `term`.
	///
	/// A term whose pattern cannot be built never matches.
	pub fn new(term: &str) -> Self {
		let source = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(term));
		let pattern = match RegexBuilder::new(&source).case_insensitive(true).build() {
			Ok(pattern) => Some(pattern),
			Err(e) => {
				log::warn!("Cannot build word pattern for {term:?}: {e}");
				None
			}
		};
		Self { term: term.to_owned(), pattern }
	}

	/// The term this matcher was built for.
	pub fn term(&self) -> &str {
		&self.term
	}

	/// Returns `true` if the term occurs as a whole word in `haystack`.
	pub fn is_match(&self, haystack: &str) -> bool {
		self.pattern.as_ref().is_some_and(|p| p.is_match(haystack))
	}

	/// Replaces the first whole-word occurrence of the term with [`BLANK`].
	///
	/// Returns `None` if the term does not occur.
	pub fn blank(&self, haystack: &str) -> Option<String> {
		let pattern = self.pattern.as_ref()?;
		if !pattern.is_match(haystack) {
			return None;
		}
		Some(pattern.replace(haystack, NoExpand(BLANK)).into_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_whole_word_only() {
		let light = WholeWord::new("light");
		assert!(light.is_match("Chlorophyll absorbs LIGHT."));
		assert!(light.is_match("The light-dependent reactions"));
		assert!(!light.is_match("Lightning strikes twice."));
		assert!(!light.is_match("Daylight saving."));
	}

	#[test]
	fn test_blank_first_occurrence() {
		let light = WholeWord::new("light");
		assert_eq!(
			light.blank("Light in, light out."),
			Some("_____ in, light out.".to_owned())
		);
		assert_eq!(light.blank("Nothing here."), None);
	}

	#[test]
	fn test_metacharacters_are_literal() {
		assert!(WholeWord::new("light-dependent").is_match("The light-dependent reactions"));
		assert!(!WholeWord::new("c.t").is_match("the cat sat"));
		assert!(WholeWord::new("plant's").is_match("A plant's cells"));
	}

	#[test]
	fn test_boundaries_are_ascii() {
		// Tokens lose their non-ASCII letters, so "café" yields "caf"
		let caf = WholeWord::new("caf");
		assert!(caf.is_match("Un café noir."));
		assert_eq!(caf.blank("Un café noir."), Some("Un _____é noir.".to_owned()));
		assert!(!caf.is_match("Caffeine keeps you awake."));
	}

	#[test]
	fn test_blank_marker_is_not_expanded() {
		let word = WholeWord::new("cost");
		assert_eq!(word.blank("cost is $1"), Some("_____ is $1".to_owned()));
	}
}
