use crate::study::grading::Gradable;

/// Walks a learner through a list of items, remembering the misses.
///
/// Flashcards are self-assessed through [`StudySession::record`];
/// gradable items (questions, written prompts) go through
/// [`StudySession::answer`].
#[derive(Debug, Clone)]
pub struct StudySession<T: Clone> {
	items: Vec<T>,
	index: usize,
	wrong: Vec<T>,
}

impl<T: Clone> StudySession<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self { items, index: 0, wrong: Vec::new() }
	}

	/// The item waiting for an answer, `None` once the run is over.
	pub fn current(&self) -> Option<&T> {
		self.items.get(self.index)
	}

	/// Records the outcome for the current item and moves on.
	///
	/// Does nothing once the session is finished.
	pub fn record(&mut self, correct: bool) {
		let Some(item) = self.items.get(self.index) else {
			return;
		};
		if !correct {
			self.wrong.push(item.clone());
		}
		self.index += 1;
	}

	/// `(position, total)`, position being 1-based and capped at `total`.
	pub fn progress(&self) -> (usize, usize) {
		let total = self.items.len();
		((self.index + 1).min(total), total)
	}

	pub fn is_finished(&self) -> bool {
		self.index >= self.items.len()
	}

	/// Items missed so far in this run.
	pub fn wrong(&self) -> &[T] {
		&self.wrong
	}

	/// Starts the same items over, forgetting the misses.
	pub fn restart(&mut self) {
		self.index = 0;
		self.wrong.clear();
	}

	/// Starts a new run over the missed items only.
	///
	/// Returns `false` (and changes nothing) when nothing was missed.
	pub fn retry_wrong(&mut self) -> bool {
		if self.wrong.is_empty() {
			return false;
		}
		self.items = std::mem::take(&mut self.wrong);
		self.index = 0;
		true
	}
}

impl<T: Clone + Gradable> StudySession<T> {
	/// Grades `response` against the current item and records the outcome.
	///
	/// Returns `None` once the session is finished.
	pub fn answer(&mut self, response: &str) -> Option<bool> {
		let correct = self.current()?.grade(response);
		self.record(correct);
		Some(correct)
	}
}
