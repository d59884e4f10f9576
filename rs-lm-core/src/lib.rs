//! Character-level n-gram text generation library.
//!
//! This crate provides a fixed-window Markov model over characters:
//! - Single-pass training from any character stream
//! - Probability and cumulative probability tables per window
//! - Reproducible generation driven by an owned, seedable random source
//!
//! File handling is kept internal; callers train from a path, a string
//! or any iterator of `char`.

/// Error type shared by every fallible operation.
pub mod error;

/// Language model, transition table and sampling.
pub mod model;

/// I/O utilities (corpus loading).
pub mod io;

pub use error::{ModelError, Result};
pub use model::language_model::LanguageModel;
pub use model::options::ModelOptions;
pub use model::random_source::RandomSource;
