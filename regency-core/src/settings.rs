use crate::engine::random::RandomSource;
use crate::engine::range::DEFAULT_MAX_CANDIDATES;
use crate::error::{RegencyError, Result};

/// Tunable generation parameters.
///
/// # Invariants
/// - `max_candidates` is always >= 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
	/// Upper bound on the candidates one range expression may expand to.
	max_candidates: usize,

	/// Seed for the random source; `None` seeds from the current time.
	pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
	fn default() -> Self {
		Self { max_candidates: DEFAULT_MAX_CANDIDATES, seed: None }
	}
}

impl GeneratorSettings {
	/// Returns the current candidate bound.
	pub fn max_candidates(&self) -> usize {
		self.max_candidates
	}

	/// Sets the candidate bound.
	///
	/// # Errors
	/// Returns `InvalidSettings` if `max_candidates` is 0.
	pub fn set_max_candidates(&mut self, max_candidates: usize) -> Result<()> {
		if max_candidates == 0 {
			return Err(RegencyError::InvalidSettings(
				"max_candidates must be at least 1".to_owned(),
			));
		}
		self.max_candidates = max_candidates;
		Ok(())
	}

	/// Builds the random source described by these settings.
	pub fn random_source(&self) -> RandomSource {
		match self.seed {
			Some(seed) => RandomSource::from_seed(seed),
			None => RandomSource::from_time(),
		}
	}
}
