use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};

/// Smallest number of items a collection may be asked for.
pub const MIN_COUNT: usize = 1;
/// Largest number of items a collection may be asked for.
pub const MAX_COUNT: usize = 50;
/// Item count used when the caller gives none.
pub const DEFAULT_COUNT: usize = 10;
/// Seed used when the caller gives none.
pub const DEFAULT_SEED: i64 = 1;
/// Amount added to the seed by a reshuffle.
pub const RESHUFFLE_STEP: i64 = 1;
/// Exclusive upper bound of freshly drawn seeds.
const RANDOM_SEED_BOUND: i64 = 999_999;

/// Generation controls passed into every preview.
///
/// # Responsibilities
/// - Bound the number of generated items per collection (`count`)
/// - Carry the seed that makes generation reproducible
///
/// # Invariants
/// - `MIN_COUNT <= count <= MAX_COUNT`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawGenerationConfig")]
pub struct GenerationConfig {
	count: usize,
	seed: i64,
}

/// Unchecked wire form, validated through `GenerationConfig::new`.
#[derive(Deserialize)]
struct RawGenerationConfig {
	count: usize,
	seed: i64,
}

impl TryFrom<RawGenerationConfig> for GenerationConfig {
	type Error = StudyError;

	fn try_from(raw: RawGenerationConfig) -> Result<Self> {
		Self::new(raw.count, raw.seed)
	}
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { count: DEFAULT_COUNT, seed: DEFAULT_SEED }
	}
}

impl GenerationConfig {
	/// Creates a configuration.
	///
	/// # Errors
	/// Returns `StudyError::InvalidCount` if `count` is outside
	/// `MIN_COUNT..=MAX_COUNT`.
	pub fn new(count: usize, seed: i64) -> Result<Self> {
		let mut config = Self { seed, ..Self::default() };
		config.set_count(count)?;
		Ok(config)
	}

	/// Creates a configuration with a seed drawn from the system RNG.
	///
	/// This is the "load sample" behavior: the material is reproducible
	/// from the returned seed, but the seed itself is fresh.
	pub fn with_random_seed(count: usize) -> Result<Self> {
		Self::new(count, rand::rng().random_range(0..RANDOM_SEED_BOUND))
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn seed(&self) -> i64 {
		self.seed
	}

	/// Sets the requested item count.
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
			return Err(StudyError::InvalidCount(count));
		}
		self.count = count;
		Ok(())
	}

	/// Advances the seed by `RESHUFFLE_STEP`, producing a new ordering
	/// of the same material.
	pub fn reshuffle(&mut self) {
		self.seed = self.seed.wrapping_add(RESHUFFLE_STEP);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_count_bounds() {
		assert!(GenerationConfig::new(1, 0).is_ok());
		assert!(GenerationConfig::new(50, 0).is_ok());
		assert!(matches!(GenerationConfig::new(0, 0), Err(StudyError::InvalidCount(0))));
		assert!(matches!(GenerationConfig::new(51, 0), Err(StudyError::InvalidCount(51))));
	}

	#[test]
	fn test_set_count_keeps_previous_on_error() {
		let mut config = GenerationConfig::new(5, 3).unwrap();
		assert!(config.set_count(100).is_err());
		assert_eq!(config.count(), 5);
	}

	#[test]
	fn test_reshuffle_steps_seed() {
		let mut config = GenerationConfig::default();
		assert_eq!(config.seed(), DEFAULT_SEED);
		config.reshuffle();
		config.reshuffle();
		assert_eq!(config.seed(), DEFAULT_SEED + 2);
		assert_eq!(config.count(), DEFAULT_COUNT);
	}

	#[test]
	fn test_random_seed_range() {
		for _ in 0..32 {
			let config = GenerationConfig::with_random_seed(10).unwrap();
			assert!((0..RANDOM_SEED_BOUND).contains(&config.seed()));
		}
	}

	#[test]
	fn test_deserialize_validates() {
		let config: GenerationConfig = serde_json::from_str(r#"{"count": 3, "seed": -7}"#).unwrap();
		assert_eq!((config.count(), config.seed()), (3, -7));
		assert!(serde_json::from_str::<GenerationConfig>(r#"{"count": 0, "seed": 1}"#).is_err());
	}

	#[test]
	fn test_error_message() {
		let err = GenerationConfig::new(0, 0).unwrap_err();
		assert_eq!(err.to_string(), "Requested count must be between 1 and 50, got 0");
	}
}
