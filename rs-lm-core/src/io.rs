use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads a whole text file into memory.
///
/// - The content must be valid UTF-8
/// - Line endings are kept: they are symbols like any other
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	BufReader::new(File::open(filename)?).read_to_string(&mut contents)?;
	Ok(contents)
}
