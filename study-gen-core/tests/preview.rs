use std::collections::HashSet;

use study_gen_core::study::export::StudySet;
use study_gen_core::study::SAMPLE_NOTES;
use study_gen_core::{preview, GenerationConfig, Preview};

const PHOTOSYNTHESIS: &str = "Photosynthesis converts light into energy. Chlorophyll absorbs light.";

/// Everything but the ids.
fn content(preview: &Preview) -> (Vec<(String, String)>, Vec<(String, String, Vec<String>)>, Vec<(String, String)>) {
	(
		preview.flashcards.iter().map(|c| (c.front.clone(), c.back.clone())).collect(),
		preview.mcq.iter().map(|q| (q.stem.clone(), q.correct.clone(), q.choices.clone())).collect(),
		preview.written.iter().map(|w| (w.prompt.clone(), w.answer.clone())).collect(),
	)
}

fn config(count: usize, seed: i64) -> GenerationConfig {
	GenerationConfig::new(count, seed).unwrap()
}

#[test]
fn test_deterministic_for_same_inputs() {
	for seed in [0, 1, 42, -3, 999_998] {
		for count in [1, 4, 10, 50] {
			let a = preview(SAMPLE_NOTES, &config(count, seed));
			let b = preview(SAMPLE_NOTES, &config(count, seed));
			assert_eq!(content(&a), content(&b));
		}
	}
}

#[test]
fn test_seed_changes_ordering() {
	let orders: HashSet<Vec<(String, String)>> = (0..10)
		.map(|seed| content(&preview(SAMPLE_NOTES, &config(10, seed))).0)
		.collect();
	assert!(orders.len() > 1);
}

#[test]
fn test_count_bound_and_mcq_validity() {
	let notes = [
		SAMPLE_NOTES,
		PHOTOSYNTHESIS,
		"The cat sat.",
		"no punctuation at all but several useful words here",
		"Repeat repeat repeat. Repeat repeat repeat.",
		"Mitochondria — powerhouse; ribosomes (protein synthesis)! DNA? RNA.",
	];
	for text in notes {
		for count in [1, 2, 5, 17, 50] {
			for seed in [1, 2, 3] {
				let result = preview(text, &config(count, seed));
				assert!(result.flashcards.len() <= count);
				assert!(result.mcq.len() <= count);
				assert!(result.written.len() <= count);

				for item in &result.mcq {
					assert_eq!(item.choices.iter().filter(|c| **c == item.correct).count(), 1);
					let unique: HashSet<&String> = item.choices.iter().collect();
					assert_eq!(unique.len(), item.choices.len());
					assert!((1..=4).contains(&item.choices.len()));
				}

				let cards: HashSet<(&str, &str)> = result.flashcards.iter().map(|c| c.key()).collect();
				assert_eq!(cards.len(), result.flashcards.len());
			}
		}
	}
}

#[test]
fn test_empty_input() {
	for count in [1, 10, 50] {
		for seed in [0, 7] {
			let result = preview("", &config(count, seed));
			assert!(result.flashcards.is_empty());
			assert!(result.mcq.is_empty());
			assert!(result.written.is_empty());
		}
	}
	assert_eq!(preview("  \n ", &GenerationConfig::default()), Preview::default());
}

#[test]
fn test_photosynthesis_scenario() {
	let keywords = ["photosynthesis", "converts", "light", "energy", "chlorophyll", "absorbs"];
	let sentences = ["Photosynthesis converts light into energy.", "Chlorophyll absorbs light."];

	let result = preview(PHOTOSYNTHESIS, &config(2, 12345));
	assert_eq!(result.flashcards.len(), 2);
	for card in &result.flashcards {
		let lower = card.front.to_lowercase();
		assert!(keywords.contains(&lower.as_str()));
		let mut chars = card.front.chars();
		assert!(chars.next().unwrap().is_uppercase());
		assert!(sentences.contains(&card.back.as_str()));
	}
}

#[test]
fn test_small_vocabulary_scenario() {
	let result = preview("The cat sat.", &config(5, 1));
	assert!(result.mcq.len() < 5);
	for item in &result.mcq {
		assert!(item.choices.len() < 4);
		assert!(item.choices.contains(&item.correct));
	}
}

#[test]
fn test_no_keywords_scenario() {
	let result = preview("It is so. We do.", &config(3, 1));
	assert!(result.flashcards.is_empty());
	assert!(result.mcq.is_empty());
	let answers: Vec<&str> = result.written.iter().map(|w| w.answer.as_str()).collect();
	assert_eq!(answers, vec!["concept 1", "concept 2", "concept 3"]);
}

#[test]
fn test_export_round_trip() {
	let generated = preview(SAMPLE_NOTES, &config(8, 5));
	let set = StudySet::new(SAMPLE_NOTES, generated.clone());

	let parsed = StudySet::from_json(&set.to_json().unwrap()).unwrap();
	assert_eq!(parsed.preview(), generated);
	assert_eq!(parsed.notes, SAMPLE_NOTES);
	assert_eq!(parsed.generated_at, set.generated_at);

	let value: serde_json::Value = serde_json::from_str(&set.to_json().unwrap()).unwrap();
	let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
	keys.sort();
	assert_eq!(keys, vec!["flashcards", "generatedAt", "mcq", "notes", "written"]);
}
