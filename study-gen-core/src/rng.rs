use rand::RngCore;
use rand::seq::SliceRandom;

/// Increment added to the accumulator on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, used to scale a 32-bit draw into `[0, 1)`.
const SCALE: f64 = 4_294_967_296.0;

/// Seeded "mulberry32" pseudo-random generator.
///
/// The whole state is a single 32-bit accumulator. Two generators built
/// from the same seed produce the same infinite sequence, which is what
/// makes generation reproducible for a given `(notes, seed)`.
///
/// # Notes
/// - Not cryptographically secure; meant for UI-scale shuffles.
/// - Implements `RngCore`, so it can drive any `rand` algorithm
///   (shuffles in particular) without touching a system random source.
/// - Each draw mutates the state: never share one instance between two
///   logically independent generation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
	state: u32,
}

impl Mulberry32 {
	/// Creates a generator from an integer seed.
	///
	/// Seeds are reduced modulo 2^32, so negative or very large values are
	/// accepted and map onto the same 32-bit state space.
	pub fn new(seed: i64) -> Self {
		Self { state: seed as u32 }
	}

	/// Returns the next float in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		f64::from(self.next_u32()) / SCALE
	}

	/// Picks an element with `floor(next_f64() * len)`.
	///
	/// Returns `None` (without drawing) when `items` is empty.
	pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		let index = (self.next_f64() * items.len() as f64) as usize;
		items.get(index.min(items.len() - 1))
	}

	/// Shuffles `items` in place with a seeded Fisher–Yates pass.
	pub fn shuffle<T>(&mut self, items: &mut [T]) {
		items.shuffle(self);
	}
}

impl RngCore for Mulberry32 {
	fn next_u32(&mut self) -> u32 {
		self.state = self.state.wrapping_add(INCREMENT);
		let mut t = self.state;
		t = (t ^ (t >> 15)).wrapping_mul(t | 1);
		t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
		t ^ (t >> 14)
	}

	fn next_u64(&mut self) -> u64 {
		let low = u64::from(self.next_u32());
		let high = u64::from(self.next_u32());
		(high << 32) | low
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		for chunk in dst.chunks_mut(4) {
			let bytes = self.next_u32().to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}
}
