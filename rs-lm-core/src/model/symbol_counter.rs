use serde::Serialize;

/// One observed continuation of a window.
///
/// `p` and `cp` stay at `0.0` until the owning counter is normalized.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SymbolEntry {
	/// The symbol that followed the window.
	pub symbol: char,
	/// How many times `symbol` followed the window during training.
	pub count: usize,
	/// `count / total` for the owning window.
	pub p: f64,
	/// Running sum of `p` up to and including this entry.
	pub cp: f64,
}

impl SymbolEntry {
	fn new(symbol: char) -> Self {
		Self { symbol, count: 1, p: 0.0, cp: 0.0 }
	}
}

/// Frequency record of the symbols that followed a single window.
///
/// Conceptually, this is the set of outgoing edges of one Markov-chain state,
/// weighted by how often each edge was observed.
///
/// ## Responsibilities:
/// - Accumulate symbol occurrences during training
/// - Derive `p` and `cp` once training is over
/// - Pick a symbol from a uniform draw using the cumulative probabilities
///
/// ## Invariants
/// - Entries are kept in first-seen order, which makes `cp` and sampling
///   deterministic for a given training input
/// - Each entry count is strictly positive
/// - After `normalize`, `cp` is non-decreasing and the last one is ~1.0
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct SymbolCounter {
	entries: Vec<SymbolEntry>,
	#[serde(skip)]
	normalized: bool,
}

impl SymbolCounter {
	/// Creates an empty counter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `symbol`.
	///
	/// - If the symbol is already known, its count is increased.
	/// - Otherwise, a new entry is appended with a count of 1.
	pub fn update(&mut self, symbol: char) {
		match self.entries.iter_mut().find(|entry| entry.symbol == symbol) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(SymbolEntry::new(symbol)),
		}
		self.normalized = false;
	}

	/// Computes `p` and `cp` for every entry, in enumeration order.
	///
	/// Does nothing on an empty counter.
	pub fn normalize(&mut self) {
		let total = self.total();
		if total == 0 {
			return;
		}

		let total = total as f64;
		let mut running = 0.0;
		for entry in &mut self.entries {
			entry.p = entry.count as f64 / total;
			running += entry.p;
			entry.cp = running;
		}
		self.normalized = true;
	}

	/// Returns the symbol of the first entry whose `cp` is at least `draw`.
	///
	/// `draw` is expected in `[0, 1)`. This is a linear scan: enumeration
	/// order is what makes sampling reproducible.
	///
	/// Returns `None` if the counter has no entries.
	pub fn sample(&self, draw: f64) -> Option<char> {
		debug_assert!(
			self.entries.is_empty() || self.normalized,
			"sampling a counter that was never normalized"
		);

		let last = self.entries.last()?;
		let picked = self
			.entries
			.iter()
			.find(|entry| entry.cp >= draw)
			// Rounding can leave the last cp a hair under 1.0
			.unwrap_or(last);
		Some(picked.symbol)
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// Returns the entry recorded for `symbol`, if any.
	pub fn get(&self, symbol: char) -> Option<&SymbolEntry> {
		self.entries.iter().find(|entry| entry.symbol == symbol)
	}

	/// Entries in first-seen order.
	pub fn entries(&self) -> &[SymbolEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn is_normalized(&self) -> bool {
		self.normalized
	}
}

impl std::fmt::Display for SymbolCounter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "({:?} {} {} {})", entry.symbol, entry.count, entry.p, entry.cp)?;
		}
		write!(f, ")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn counter_from(text: &str) -> SymbolCounter {
		let mut counter = SymbolCounter::new();
		for c in text.chars() {
			counter.update(c);
		}
		counter.normalize();
		counter
	}

	#[test]
	fn test_update_keeps_first_seen_order() {
		let counter = counter_from("mehmo");
		let symbols: Vec<char> = counter.entries().iter().map(|e| e.symbol).collect();
		assert_eq!(symbols, vec!['m', 'e', 'h', 'o']);
		assert_eq!(counter.get('m').map(|e| e.count), Some(2));
		assert_eq!(counter.total(), 5);
	}

	#[test]
	fn test_normalize_probabilities() {
		let counter = counter_from("aab");
		let a = counter.get('a').unwrap();
		let b = counter.get('b').unwrap();
		assert!((a.p - 2.0 / 3.0).abs() < 1e-12);
		assert!((a.cp - 2.0 / 3.0).abs() < 1e-12);
		assert!((b.p - 1.0 / 3.0).abs() < 1e-12);
		assert!((b.cp - 1.0).abs() < 1e-12);
	}

	#[test]
	fn test_normalize_empty_is_noop() {
		let mut counter = SymbolCounter::new();
		counter.normalize();
		assert!(counter.is_empty());
		assert!(!counter.is_normalized());
		assert_eq!(counter.sample(0.5), None);
	}

	#[test]
	fn test_sample_picks_first_cp_at_or_above_draw() {
		// cp: a = 0.5, b = 0.75, c = 1.0
		let counter = counter_from("aabc");
		assert_eq!(counter.sample(0.0), Some('a'));
		assert_eq!(counter.sample(0.5), Some('a'));
		assert_eq!(counter.sample(0.5001), Some('b'));
		assert_eq!(counter.sample(0.75), Some('b'));
		assert_eq!(counter.sample(0.99), Some('c'));
	}

	#[test]
	fn test_sample_falls_back_to_last_entry() {
		let counter = counter_from("abc");
		assert_eq!(counter.sample(1.5), Some('c'));
	}

	#[test]
	fn test_update_after_normalize_clears_flag() {
		let mut counter = counter_from("ab");
		assert!(counter.is_normalized());
		counter.update('c');
		assert!(!counter.is_normalized());
	}

	#[test]
	fn test_display_lists_entries() {
		let counter = counter_from("ab");
		assert_eq!(counter.to_string(), "(('a' 1 0.5 0.5) ('b' 1 0.5 1))");
	}
}
