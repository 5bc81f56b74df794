use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::rng::Mulberry32;
use crate::study::config::GenerationConfig;
use crate::study::generator::Preview;
use crate::study::items::{Flashcard, McqItem, WrittenItem};
use crate::study::mcq::build_choices;

// Literal pattern, cannot fail to compile
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s[-–—]\s|—|–").unwrap());

/// Parses glossary-style notes into flashcards.
///
/// Each line of the form `Term — Definition` (em dash, en dash, or a
/// spaced hyphen) becomes a card with the term on the front and the
/// definition on the back. Only the first separator splits; the text
/// after a second separator is dropped.
///
/// Blank lines, lines without a separator, and lines with an empty side
/// are skipped. Repeated (term, definition) pairs yield one card.
pub fn parse(text: &str) -> Vec<Flashcard> {
	let mut seen = HashSet::new();
	let mut cards = Vec::new();

	for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
		let mut parts = SEPARATOR.splitn(line, 3);
		let term = parts.next().unwrap_or_default().trim();
		let definition = parts.next().unwrap_or_default().trim();
		if term.is_empty() || definition.is_empty() {
			continue;
		}
		if seen.insert((term.to_owned(), definition.to_owned())) {
			cards.push(Flashcard::new(term.to_owned(), definition.to_owned()));
		}
	}

	cards
}

/// Quiz material for glossary notes: one flashcard, one question and
/// one written prompt per `Term — Definition` line.
///
/// Only the seed of `config` is used; every glossary line is kept.
pub fn preview(text: &str, config: &GenerationConfig) -> Preview {
	let flashcards = parse(text);
	let mut rng = Mulberry32::new(config.seed());
	Preview {
		mcq: questions(&flashcards, &mut rng),
		written: prompts(&flashcards),
		flashcards,
	}
}

/// Turns glossary cards into multiple-choice questions.
///
/// The term is the stem and its definition the correct answer. Up to 3
/// other definitions of the glossary, drawn from `rng`, are the
/// distractors.
pub fn questions(cards: &[Flashcard], rng: &mut Mulberry32) -> Vec<McqItem> {
	let definitions: IndexSet<&str> = cards.iter().map(|card| card.back.as_str()).collect();
	let pool: Vec<&str> = definitions.into_iter().collect();

	cards
		.iter()
		.map(|card| {
			let choices = build_choices(&card.back, &pool, rng);
			McqItem::new(card.front.clone(), card.back.clone(), choices)
		})
		.collect()
}

/// Turns glossary cards into written prompts: the term is asked, the
/// definition is the expected answer.
pub fn prompts(cards: &[Flashcard]) -> Vec<WrittenItem> {
	cards
		.iter()
		.map(|card| WrittenItem::new(card.front.clone(), card.back.clone()))
		.collect()
}
