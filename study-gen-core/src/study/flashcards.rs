use std::collections::HashSet;

use crate::rng::Mulberry32;
use crate::study::items::{title_case, Flashcard};
use crate::text::matcher::WholeWord;
use crate::text::NotesAnalysis;

/// Number of keywords considered for flashcards.
pub const FLASHCARD_POOL: usize = 80;

/// Back of a card synthesized from a keyword alone.
pub fn explain_prompt(term: &str) -> String {
	format!("Explain the concept of “{term}” in your own words based on your notes.")
}

/// Generates up to `count` flashcards from raw notes.
pub fn generate(text: &str, count: usize, rng: &mut Mulberry32) -> Vec<Flashcard> {
	from_notes(&NotesAnalysis::new(text), count, rng)
}

/// Generates up to `count` flashcards from analysed notes.
///
/// # Behavior
/// - One card per sentence: the front is the first pool keyword found in
///   the sentence as a whole word (title-cased), or a random pool keyword
///   when none occurs; the back is the sentence.
/// - Short on cards: keyword-only cards are added by cycling once through
///   the pool, with an "explain this term" back.
/// - Cards are deduplicated on (front, back), shuffled, then truncated.
///
/// # Notes
/// - Empty keyword pool → no cards, whatever the sentence count.
/// - Draws from `rng` for the random fallback keyword and the shuffle.
pub fn from_notes(notes: &NotesAnalysis, count: usize, rng: &mut Mulberry32) -> Vec<Flashcard> {
	let pool = notes.keyword_pool(FLASHCARD_POOL);
	if pool.is_empty() || count == 0 {
		return Vec::new();
	}
	let matchers: Vec<WholeWord> = pool.iter().map(|term| WholeWord::new(term)).collect();

	let mut deck = Deck::default();
	for sentence in notes.sentences() {
		let term = match matchers.iter().find(|m| m.is_match(sentence)) {
			Some(matcher) => matcher.term(),
			None => match rng.pick(&pool) {
				Some(term) => *term,
				None => continue,
			},
		};
		deck.push(Flashcard::new(title_case(term), sentence.clone()));
	}

	// Synthesize from keywords, one pass over the pool at most
	let offset = deck.cards.len();
	for step in 0..pool.len() {
		if deck.cards.len() >= count {
			break;
		}
		let term = pool[(offset + step) % pool.len()];
		deck.push(Flashcard::new(term.to_owned(), explain_prompt(term)));
	}

	let mut cards = deck.cards;
	rng.shuffle(&mut cards);
	cards.truncate(count);
	cards
}

/// Cards in insertion order, without (front, back) duplicates.
#[derive(Default)]
struct Deck {
	cards: Vec<Flashcard>,
	seen: HashSet<(String, String)>,
}

impl Deck {
	fn push(&mut self, card: Flashcard) {
		if self.seen.insert((card.front.clone(), card.back.clone())) {
			self.cards.push(card);
		}
	}
}
