use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::io;

/// Reads a word list file and returns its non-empty entries.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims surrounding whitespace and drops blank lines
pub(crate) fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Extension of the binary dictionary caches written next to word lists.
pub(crate) const CACHE_EXTENSION: &str = "regency.bin";

/// Builds the cache path for a word list, next to it and sharing its stem.
///
/// The double extension keeps the cache apart from any `<stem>.bin` the
/// user may own.
///
/// Example:
/// `data/words.txt` → `data/words.regency.bin`
pub(crate) fn build_cache_path<P: AsRef<Path>>(word_list: P) -> io::Result<PathBuf> {
	let word_list = word_list.as_ref();
	let stem = word_list
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Word list path has no filename"))?;

	let mut file_name = stem.to_os_string();
	file_name.push(".");
	file_name.push(CACHE_EXTENSION);
	Ok(word_list.with_file_name(file_name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cache_path_sits_next_to_word_list() {
		let path = build_cache_path("data/words.txt").unwrap();
		assert_eq!(path, PathBuf::from("data/words.regency.bin"));
	}

	#[test]
	fn cache_path_without_parent_stays_relative() {
		let path = build_cache_path("words").unwrap();
		assert_eq!(path, PathBuf::from("words.regency.bin"));
	}

	#[test]
	fn cache_path_rejects_missing_filename() {
		assert!(build_cache_path("..").is_err());
	}
}
