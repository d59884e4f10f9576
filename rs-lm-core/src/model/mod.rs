//! The fixed-window language model and its building blocks:
//! - Per-window symbol frequencies (`SymbolCounter`)
//! - Window to frequencies mapping (`TransitionTable`)
//! - Training and generation (`LanguageModel`)
//! - Random draws (`RandomSource`)
//! - Construction parameters (`ModelOptions`)

/// Training, probability computation and text generation.
pub mod language_model;

/// Validated construction parameters.
pub mod options;

/// Uniform random draws, seeded or from OS entropy.
pub mod random_source;

/// Ordered symbol counts with derived `p` / `cp`, and weighted sampling.
pub mod symbol_counter;

/// Mapping from a fixed-length window to its `SymbolCounter`.
pub mod transition_table;
