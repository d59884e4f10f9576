//! Error types for model construction and training.

use thiserror::Error;

/// Errors reported by the language model.
///
/// Running out of continuations during generation is not an error: the
/// generated text is simply shorter than requested.
#[derive(Error, Debug)]
pub enum ModelError {
	/// Window length must be at least one symbol
	#[error("window length must be >= 1")]
	InvalidWindowLength,

	/// Corpus too short to form the first window
	#[error("input too short: expected at least {expected} symbols, got {actual}")]
	InputTooShort { expected: usize, actual: usize },

	/// Corpus could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
