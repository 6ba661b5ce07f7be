use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{RegencyError, Result};

/// Source of randomness for one generation (or a serialized series of them).
///
/// Each concurrent generation must own its own `RandomSource`.
pub struct RandomSource {
	rng: StdRng,
}

impl RandomSource {
	/// Creates a deterministic source; the same seed replays the same draws.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Creates a source seeded from the current system time.
	pub fn from_time() -> Self {
		let seed = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
			.unwrap_or_default();
		Self::from_seed(seed)
	}

	/// Returns an integer in `[low, high]`, uniformly distributed.
	///
	/// Sampling goes through `rand`'s bounded range sampler, which rejects
	/// out-of-zone draws and so carries no modulo bias.
	///
	/// # Errors
	/// Returns `InvalidBounds` if `high < low`.
	pub fn random_int_inclusive(&mut self, low: usize, high: usize) -> Result<usize> {
		if high < low {
			return Err(RegencyError::InvalidBounds { low, high });
		}
		Ok(self.rng.random_range(low..=high))
	}

	/// Picks one element uniformly, or `None` if `items` is empty.
	pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		let last = items.len().checked_sub(1)?;
		let index = self.random_int_inclusive(0, last).ok()?;
		items.get(index)
	}
}

impl Default for RandomSource {
	fn default() -> Self {
		Self::from_time()
	}
}

impl fmt::Debug for RandomSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RandomSource").finish_non_exhaustive()
	}
}
