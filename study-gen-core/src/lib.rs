//! Deterministic notes-to-study-material generation library.
//!
//! This crate turns free-form notes into quiz material:
//! - Flashcards (term on the front, source sentence on the back)
//! - Multiple-choice questions built by blanking keywords
//! - Written-recall (cloze) prompts
//!
//! Every random decision is drawn from a seeded generator, so the same
//! `(notes, count, seed)` always yields the same material (item ids aside).
//! Export archives, answer grading and study sessions are built on top.

/// Seeded pseudo-random number generator.
pub mod rng;

/// Text analysis: tokens, sentences, keywords and whole-word matching.
pub mod text;

/// Study material generation, export, grading and sessions.
pub mod study;

/// Error type shared by the fallible parts of the crate.
pub mod error;

/// I/O utilities (notes loading, output path helpers).
pub mod io;

pub use error::{Result, StudyError};
pub use rng::Mulberry32;
pub use study::config::GenerationConfig;
pub use study::generator::{preview, Preview};
