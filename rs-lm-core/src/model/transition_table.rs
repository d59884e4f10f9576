use super::symbol_counter::SymbolCounter;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Maps every window seen during training to the symbols that followed it.
///
/// A window is a fixed-length run of `window_length` symbols. Keys are stored
/// as boxed slices and looked up by `&[char]`, so callers can probe the table
/// with a view into a larger buffer without allocating.
///
/// # Responsibilities
/// - Accumulate (window, next symbol) observations
/// - Normalize every counter once training is over
/// - Answer "what may follow this window?" during generation
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key has exactly `window_length` symbols
/// - Every counter has at least one entry
#[derive(Clone, Debug)]
pub struct TransitionTable {
	window_length: usize,
	counters: HashMap<Box<[char]>, SymbolCounter>,
}

impl TransitionTable {
	/// Creates an empty table for windows of `window_length` symbols.
	///
	/// The model validates `window_length` before building a table.
	pub(crate) fn new(window_length: usize) -> Self {
		debug_assert!(window_length > 0);
		Self { window_length, counters: HashMap::new() }
	}

	/// Records that `next` followed `window`.
	///
	/// The counter for `window` is created on first observation.
	pub(crate) fn observe(&mut self, window: &[char], next: char) {
		debug_assert_eq!(window.len(), self.window_length, "window length mismatch");

		match self.counters.get_mut(window) {
			Some(counter) => counter.update(next),
			None => {
				let mut counter = SymbolCounter::new();
				counter.update(next);
				self.counters.insert(window.into(), counter);
			}
		}
	}

	/// Returns the counter for `window`, or `None` if it was never observed.
	pub fn get(&self, window: &[char]) -> Option<&SymbolCounter> {
		self.counters.get(window)
	}

	/// Normalizes every counter of the table.
	pub fn normalize_all(&mut self) {
		for counter in self.counters.values_mut() {
			counter.normalize();
		}
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.counters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counters.is_empty()
	}

	/// Iterates over `(window, counter)` pairs in arbitrary order.
	pub fn windows(&self) -> impl Iterator<Item = (&[char], &SymbolCounter)> {
		self.counters.iter().map(|(window, counter)| (window.as_ref(), counter))
	}

	/// Windows rendered as strings, sorted, with their counters.
	fn sorted(&self) -> Vec<(String, &SymbolCounter)> {
		let mut rows: Vec<(String, &SymbolCounter)> = self
			.windows()
			.map(|(window, counter)| (window.iter().collect(), counter))
			.collect();
		rows.sort_by(|a, b| a.0.cmp(&b.0));
		rows
	}
}

impl std::fmt::Display for TransitionTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (window, counter) in self.sorted() {
			writeln!(f, "{:?} : {}", window, counter)?;
		}
		Ok(())
	}
}

/// Serialized as a map from window string to its entry list.
///
/// This is a diagnostic view, there is no matching `Deserialize`.
impl Serialize for TransitionTable {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let rows = self.sorted();
		let mut map = serializer.serialize_map(Some(rows.len()))?;
		for (window, counter) in rows {
			map.serialize_entry(&window, counter)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn test_observe_creates_and_updates() {
		let mut table = TransitionTable::new(2);
		table.observe(&chars("ab"), 'c');
		table.observe(&chars("ab"), 'c');
		table.observe(&chars("ab"), 'd');
		table.observe(&chars("bc"), 'a');

		assert_eq!(table.len(), 2);
		let counter = table.get(&chars("ab")).unwrap();
		assert_eq!(counter.get('c').map(|e| e.count), Some(2));
		assert_eq!(counter.get('d').map(|e| e.count), Some(1));
	}

	#[test]
	fn test_get_unknown_window() {
		let mut table = TransitionTable::new(1);
		table.observe(&['a'], 'b');
		assert!(table.get(&['b']).is_none());
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "window length mismatch")]
	fn test_observe_rejects_wrong_length() {
		let mut table = TransitionTable::new(3);
		table.observe(&chars("ab"), 'c');
	}

	#[test]
	fn test_normalize_all() {
		let mut table = TransitionTable::new(1);
		table.observe(&['a'], 'b');
		table.observe(&['a'], 'c');
		table.observe(&['b'], 'a');
		table.normalize_all();

		for (_, counter) in table.windows() {
			assert!(counter.is_normalized());
			let last = counter.entries().last().unwrap();
			assert!((last.cp - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn test_display_sorted_by_window() {
		let mut table = TransitionTable::new(1);
		table.observe(&['b'], 'a');
		table.observe(&['a'], 'b');
		table.normalize_all();
		assert_eq!(table.to_string(), "\"a\" : (('b' 1 1 1))\n\"b\" : (('a' 1 1 1))\n");
	}
}
