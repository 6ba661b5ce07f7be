use thiserror::Error;

/// Errors raised while compiling a pattern or generating from it.
///
/// Every variant is a deterministic function of the input; nothing is retried.
#[derive(Debug, Error)]
pub enum RegencyError {
	#[error("malformed pattern at offset {position}: {reason}")]
	MalformedPattern { reason: String, position: usize },
	#[error("invalid range {start:?}-{end:?}: start is greater than end")]
	InvalidRange { start: char, end: char },
	#[error("range expression expands to more than {limit} candidates")]
	RangeTooLarge { limit: usize },
	#[error("range expression has no candidate characters")]
	EmptyRange,
	#[error("dictionary is empty")]
	EmptyDictionary,
	#[error("invalid random bounds: low {low} is greater than high {high}")]
	InvalidBounds { low: usize, high: usize },
	#[error("invalid settings: {0}")]
	InvalidSettings(String),
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	#[error("dictionary cache error: {0}")]
	Cache(#[from] postcard::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RegencyError>;
