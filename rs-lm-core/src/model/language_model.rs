use crate::error::{ModelError, Result};
use crate::io;
use crate::model::options::ModelOptions;
use crate::model::random_source::{self, RandomSource};
use crate::model::transition_table::TransitionTable;
use log::{debug, trace};
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::path::Path;

/// Character-level fixed-window Markov model.
///
/// # Responsibilities
/// - Learn, in a single pass over a corpus, which symbols follow each window
/// - Turn counts into probabilities once training is over
/// - Generate text by repeatedly sampling a continuation of the trailing window
///
/// # Invariants
/// - `window_length` is >= 1 and never changes after construction
/// - The random source is owned by the model and never reseeded, so a seeded
///   model replays the same generations for the same corpus and calls
#[derive(Debug)]
pub struct LanguageModel<R = StdRng> {
	window_length: usize,
	table: TransitionTable,
	rng: R,
}

impl LanguageModel<StdRng> {
	/// Creates an untrained model seeded from OS entropy.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::with_random_source(window_length, random_source::from_entropy())
	}

	/// Creates an untrained model whose generations are reproducible.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::with_random_source(window_length, random_source::seeded(seed))
	}

	/// Creates an untrained model from validated options.
	pub fn from_options(options: &ModelOptions) -> Self {
		let rng = match options.seed {
			Some(seed) => random_source::seeded(seed),
			None => random_source::from_entropy(),
		};
		Self {
			window_length: options.window_length(),
			table: TransitionTable::new(options.window_length()),
			rng,
		}
	}
}

impl<R: RandomSource> LanguageModel<R> {
	/// Creates an untrained model drawing from the given random source.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn with_random_source(window_length: usize, rng: R) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}
		Ok(Self { window_length, table: TransitionTable::new(window_length), rng })
	}

	/// Builds the model from a stream of symbols.
	///
	/// The first `window_length` symbols form the initial window; every
	/// following symbol is recorded as a continuation of the current window,
	/// which then slides by one. Probabilities are computed once at the end.
	///
	/// A previous training is discarded only if this one succeeds.
	///
	/// # Errors
	/// Returns `ModelError::InputTooShort` if the stream has fewer than
	/// `window_length` symbols.
	pub fn train<I>(&mut self, stream: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		let mut symbols = stream.into_iter();

		let mut window: VecDeque<char> = VecDeque::with_capacity(self.window_length);
		window.extend(symbols.by_ref().take(self.window_length));
		if window.len() < self.window_length {
			return Err(ModelError::InputTooShort {
				expected: self.window_length,
				actual: window.len(),
			});
		}

		let mut table = TransitionTable::new(self.window_length);
		let mut observations = 0usize;
		for next in symbols {
			table.observe(window.make_contiguous(), next);
			window.pop_front();
			window.push_back(next);
			observations += 1;
		}
		table.normalize_all();

		debug!(
			"trained on {} symbols: {} distinct windows of length {}",
			observations + self.window_length,
			table.len(),
			self.window_length
		);
		self.table = table;
		Ok(())
	}

	/// Builds the model from an in-memory corpus.
	pub fn train_str(&mut self, corpus: &str) -> Result<()> {
		self.train(corpus.chars())
	}

	/// Builds the model from a UTF-8 text file.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the file cannot be read, or
	/// `ModelError::InputTooShort` as `train` does.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let corpus = io::read_corpus(&path)?;
		debug!("loaded corpus {} ({} bytes)", path.as_ref().display(), corpus.len());
		self.train_str(&corpus)
	}

	/// Generates text starting from the trailing window of `initial_text`.
	///
	/// # Behavior
	/// - If `initial_text` is shorter than the window, it is returned unchanged.
	/// - Otherwise the output starts with the last `window_length` symbols of
	///   `initial_text`, and up to `target_length` sampled symbols are appended.
	/// - Generation stops early when the current window was never seen during
	///   training; the shorter text is returned as-is.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let initial: Vec<char> = initial_text.chars().collect();
		if initial.len() < self.window_length {
			return initial_text.to_owned();
		}

		// The walk may stop long before `limit`, so the buffer grows on demand
		let limit = target_length.saturating_add(self.window_length);
		let mut output: Vec<char> = Vec::with_capacity(self.window_length);
		output.extend_from_slice(&initial[initial.len() - self.window_length..]);

		while output.len() < limit {
			let window = &output[output.len() - self.window_length..];
			let Some(counter) = self.table.get(window) else {
				trace!("no continuation after {} symbols", output.len());
				break;
			};
			match counter.sample(self.rng.next_unit()) {
				Some(next) => output.push(next),
				None => break,
			}
		}

		output.into_iter().collect()
	}
}

impl<R> LanguageModel<R> {
	/// Number of symbols in a window.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// The learned transitions.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}
}

impl<R> std::fmt::Display for LanguageModel<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.table)
	}
}
