use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::{build_cache_path, read_words};

/// Words compiled into the binary, used when no dictionary file is given.
const BUILTIN_WORDS: &[&str] = &[
	"acorn", "amber", "anchor", "apple", "arrow", "aspen", "atlas", "badger",
	"basil", "beacon", "birch", "blossom", "bramble", "breeze", "brook", "cactus",
	"canyon", "cedar", "cinder", "clover", "comet", "coral", "cricket", "crystal",
	"daisy", "dawn", "delta", "dune", "ember", "falcon", "fern", "fjord",
	"flint", "forest", "fox", "garnet", "glacier", "granite", "harbor", "hazel",
	"heron", "island", "ivy", "jasper", "juniper", "kestrel", "lagoon", "lantern",
	"lark", "lemon", "lotus", "maple", "meadow", "mesa", "mint", "moss",
	"nectar", "nova", "oak", "onyx", "orchid", "otter", "pebble", "pine",
	"plum", "prairie", "quartz", "quill", "raven", "reef", "ridge", "river",
	"saffron", "sage", "sparrow", "spruce", "summit", "thistle", "thunder", "tide",
	"tulip", "tundra", "valley", "velvet", "violet", "walnut", "willow", "wren",
	"yarrow", "zephyr",
];

/// Ordered, immutable list of candidate words for `\y` tokens.
///
/// Only read access and a length query are needed during generation, so a
/// single dictionary can be shared by any number of generations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
	words: Vec<String>,
}

impl Dictionary {
	/// Returns the compiled-in word list.
	pub fn builtin() -> Self {
		Self::from_words(BUILTIN_WORDS.iter().copied())
	}

	/// Builds a dictionary from any list of words, keeping their order.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { words: words.into_iter().map(Into::into).collect() }
	}

	/// Loads a dictionary from a one-word-per-line text file.
	///
	/// - If a binary cache (`<stem>.regency.bin`) sits next to the file and is
	///   not older than it, the cache is loaded instead.
	/// - A cache that cannot be read or decoded is ignored with a warning.
	/// - Otherwise the text file is read and the cache is (re)written for the
	///   next load. Failing to write the cache is not an error.
	/// - Uses `postcard` for compact serialization/deserialization.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let filepath = filepath.as_ref();
		let cache_path = build_cache_path(filepath)?;

		if Self::cache_is_fresh(filepath, &cache_path) {
			if let Some(dictionary) = Self::read_cache(&cache_path) {
				return Ok(dictionary);
			}
		}

		let dictionary = Self { words: read_words(filepath)? };
		debug!("loaded {} word(s) from {}", dictionary.len(), filepath.display());

		let bytes = postcard::to_stdvec(&dictionary)?;
		if let Err(e) = std::fs::write(&cache_path, bytes) {
			warn!("could not write dictionary cache {}: {e}", cache_path.display());
		}

		Ok(dictionary)
	}

	fn read_cache(cache_path: &Path) -> Option<Self> {
		let decoded = std::fs::read(cache_path)
			.map_err(|e| e.to_string())
			.and_then(|bytes| postcard::from_bytes::<Self>(&bytes).map_err(|e| e.to_string()));
		match decoded {
			Ok(dictionary) => {
				debug!("loaded {} word(s) from {}", dictionary.len(), cache_path.display());
				Some(dictionary)
			}
			Err(e) => {
				warn!("ignoring unreadable dictionary cache {}: {e}", cache_path.display());
				None
			}
		}
	}

	fn cache_is_fresh(source: &Path, cache: &Path) -> bool {
		let modified = |path: &Path| std::fs::metadata(path).and_then(|m| m.modified()).ok();
		match (modified(source), modified(cache)) {
			(Some(source), Some(cache)) => cache >= source,
			(None, Some(_)) => true,
			_ => false,
		}
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.words.get(index).map(String::as_str)
	}

	/// Read-only view of the words, in order.
	pub fn words(&self) -> &[String] {
		&self.words
	}
}
