use indexmap::IndexMap;

use crate::study::config::GenerationConfig;
use crate::study::generator::{preview, Preview};

/// Memoizes previews keyed on `(notes, count, seed)`.
///
/// Interactive callers re-run generation on every keystroke; repeated
/// inputs are served from here instead of being regenerated.
///
/// # Invariants
/// - Holds at most `capacity` entries (at least one).
/// - When full, the least recently inserted entry is evicted first.
/// - An entry is only ever the output of `preview` for exactly its key;
///   any change to notes, count or seed is a different key.
#[derive(Debug)]
pub struct PreviewCache {
	capacity: usize,
	entries: IndexMap<(String, GenerationConfig), Preview>,
}

impl PreviewCache {
	pub fn new(capacity: usize) -> Self {
		Self { capacity: capacity.max(1), entries: IndexMap::new() }
	}

	/// Returns the cached preview for the inputs, generating it on a miss.
	pub fn get_or_generate(&mut self, notes: &str, config: &GenerationConfig) -> Preview {
		let key = (notes.to_owned(), *config);
		if let Some(cached) = self.entries.get(&key) {
			log::trace!("Preview cache hit (seed {}, count {})", config.seed(), config.count());
			return cached.clone();
		}

		let generated = preview(notes, config);
		if self.entries.len() >= self.capacity {
			self.entries.shift_remove_index(0);
		}
		self.entries.insert(key, generated.clone());
		generated
	}

	#[cfg(test)]
	fn len(&self) -> usize {
		self.entries.len()
	}
}

impl Default for PreviewCache {
	fn default() -> Self {
		Self::new(32)
	}
}
