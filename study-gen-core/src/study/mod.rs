//! Study material generation.
//!
//! This module turns analysed notes into quiz material, including:
//! - Flashcards (`flashcards`)
//! - Multiple-choice questions (`mcq`)
//! - Cloze construction and written prompts (`cloze`, `written`)
//! - The pipeline entry point (`generator::preview`) and its memo cache
//! - Archives, answer grading, study sessions and glossary parsing

/// Generation controls (item count, seed).
pub mod config;

/// Item types shared by every generator.
pub mod items;

/// Fill-in-the-blank construction for a single sentence.
pub mod cloze;

/// Term / sentence flashcards.
pub mod flashcards;

/// Multiple-choice questions with seeded distractors.
pub mod mcq;

/// Written-recall prompts.
pub mod written;

/// Pipeline entry point running all three generators.
pub mod generator;

/// Memoization of previews keyed on `(notes, count, seed)`.
pub mod cache;

/// JSON / binary archives of generated sets.
pub mod export;

/// Answer checking.
pub mod grading;

/// Quiz runs over generated items.
pub mod session;

/// `Term — Definition` notes: parsing and quiz material.
pub mod glossary;

/// Notes offered by the "load sample" action.
pub const SAMPLE_NOTES: &str = "Photosynthesis is the process by which plants convert light energy into chemical energy stored in glucose. Chlorophyll in the chloroplasts absorbs light, primarily in the blue and red wavelengths. The light-dependent reactions generate ATP and NADPH. The Calvin cycle uses ATP and NADPH to fix carbon dioxide into glucose. Stomata regulate gas exchange. Factors affecting photosynthesis include light intensity, carbon dioxide concentration, and temperature.";
