use crate::error::{ModelError, Result};

/// Construction parameters for a `LanguageModel`.
///
/// # Responsibilities
/// - Hold the window length and the optional random seed
/// - Reject a zero window length before any model is built
///
/// # Invariants
/// - `window_length` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelOptions {
	/// Number of symbols in a window (the Markov-chain order).
	window_length: usize,

	/// Seed for the random source. `None` draws entropy from the OS.
	pub seed: Option<u64>,
}

impl ModelOptions {
	/// Creates options for windows of `window_length` symbols, unseeded.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		let mut options = Self { window_length: 1, seed: None };
		options.set_window_length(window_length)?;
		Ok(options)
	}

	/// Returns the window length.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Sets the window length.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn set_window_length(&mut self, window_length: usize) -> Result<()> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}
		self.window_length = window_length;
		Ok(())
	}

	/// Builder-style seed setter.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_zero_window() {
		assert!(matches!(ModelOptions::new(0), Err(ModelError::InvalidWindowLength)));

		let mut options = ModelOptions::new(3).unwrap();
		assert!(options.set_window_length(0).is_err());
		assert_eq!(options.window_length(), 3);
	}

	#[test]
	fn test_with_seed() {
		let options = ModelOptions::new(2).unwrap().with_seed(9);
		assert_eq!(options.seed, Some(9));
		assert_eq!(options.window_length(), 2);
	}
}
