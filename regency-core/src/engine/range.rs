use crate::error::{RegencyError, Result};

/// Maximum number of candidates a single range expression may expand to.
pub const DEFAULT_MAX_CANDIDATES: usize = 5000;

/// Expands a range expression into its candidate characters.
///
/// Scanning left to right:
/// - a `-` with a character on each side contributes every character from
///   the one before to the one after, inclusive; the endpoints belong to the
///   range and are not added again as literals
/// - ranges chain: in `a-c-e` the second range starts after `c`, so `c` is
///   only added once
/// - `|` separates alternatives and contributes nothing, unless it is the
///   endpoint of a range
/// - any other character is a literal candidate
///
/// A leading or trailing `-` is a literal.
///
/// # Errors
/// - `InvalidRange` if a range starts after it ends
/// - `RangeTooLarge` if the candidates would exceed `max_candidates`
/// - `EmptyRange` if nothing is left to choose from
pub fn expand(spec: &str, max_candidates: usize) -> Result<Vec<char>> {
	let chars: Vec<char> = spec.chars().collect();
	let mut candidates = Vec::new();
	// Set when `chars[i - 1]` was the end of a range already expanded.
	let mut after_range = false;

	let mut i = 0;
	while i < chars.len() {
		let c = chars[i];

		if c == '-' && i > 0 && i + 1 < chars.len() {
			let (start, end) = (chars[i - 1], chars[i + 1]);
			if start > end {
				return Err(RegencyError::InvalidRange { start, end });
			}
			let skip = usize::from(after_range);
			let width = (end as usize) - (start as usize) + 1 - skip;
			reserve(&candidates, width, max_candidates)?;
			candidates.extend((start..=end).skip(skip));
			after_range = true;
			i += 2;
			continue;
		}
		after_range = false;

		// Range start, expanded when its `-` is reached.
		let starts_range = i + 2 < chars.len() && chars[i + 1] == '-';
		if !starts_range && c != '|' {
			reserve(&candidates, 1, max_candidates)?;
			candidates.push(c);
		}
		i += 1;
	}

	if candidates.is_empty() {
		return Err(RegencyError::EmptyRange);
	}
	Ok(candidates)
}

fn reserve(candidates: &[char], extra: usize, limit: usize) -> Result<()> {
	if candidates.len() + extra > limit {
		return Err(RegencyError::RangeTooLarge { limit });
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn expand_default(spec: &str) -> Vec<char> {
		expand(spec, DEFAULT_MAX_CANDIDATES).unwrap()
	}

	#[test]
	fn single_literal() {
		assert_eq!(expand_default("x"), vec!['x']);
	}

	#[test]
	fn simple_range() {
		assert_eq!(expand_default("a-e"), vec!['a', 'b', 'c', 'd', 'e']);
	}

	#[test]
	fn degenerate_range_has_one_candidate() {
		assert_eq!(expand_default("a-a"), vec!['a']);
	}

	#[test]
	fn word_class() {
		let candidates = expand_default("a-zA-Z0-9_");
		assert_eq!(candidates.len(), 26 + 26 + 10 + 1);
		assert!(candidates.contains(&'_'));
		assert!(!candidates.contains(&'-'));
	}

	#[test]
	fn union_with_separators() {
		assert_eq!(expand_default("a-c|x|z"), vec!['a', 'b', 'c', 'x', 'z']);
	}

	#[test]
	fn literals_are_kept_as_multiset() {
		assert_eq!(expand_default("xyx"), vec!['x', 'y', 'x']);
	}

	#[test]
	fn dash_outside_a_range_is_literal() {
		assert_eq!(expand_default("-a"), vec!['-', 'a']);
		assert_eq!(expand_default("a-"), vec!['a', '-']);
		assert_eq!(expand_default("x|-"), vec!['x', '-']);
	}

	#[test]
	fn chained_ranges_share_their_endpoint() {
		assert_eq!(expand_default("a-c-e"), vec!['a', 'b', 'c', 'd', 'e']);
		assert_eq!(expand_default("a-b-b|x"), vec!['a', 'b', 'x']);
	}

	#[test]
	fn chained_range_cannot_go_backwards() {
		assert!(matches!(
			expand("a-e-c", DEFAULT_MAX_CANDIDATES),
			Err(RegencyError::InvalidRange { start: 'e', end: 'c' })
		));
	}

	#[test]
	fn separator_can_be_a_range_endpoint() {
		assert!(matches!(
			expand("x|-z", DEFAULT_MAX_CANDIDATES),
			Err(RegencyError::InvalidRange { start: '|', end: 'z' })
		));
		assert_eq!(expand_default("x|-~"), vec!['x', '|', '}', '~']);
	}

	#[test]
	fn inverted_range_is_rejected() {
		assert!(matches!(
			expand("z-a", DEFAULT_MAX_CANDIDATES),
			Err(RegencyError::InvalidRange { start: 'z', end: 'a' })
		));
	}

	#[test]
	fn bound_is_enforced() {
		assert!(matches!(
			expand("a-z", 25),
			Err(RegencyError::RangeTooLarge { limit: 25 })
		));
		assert_eq!(expand("a-z", 26).unwrap().len(), 26);
		assert!(matches!(
			expand("\u{0}-\u{ffff}", DEFAULT_MAX_CANDIDATES),
			Err(RegencyError::RangeTooLarge { .. })
		));
	}

	#[test]
	fn only_separators_is_empty() {
		assert!(matches!(
			expand("||", DEFAULT_MAX_CANDIDATES),
			Err(RegencyError::EmptyRange)
		));
	}
}
