use log::{debug, trace};

use super::random::RandomSource;
use super::range::{DEFAULT_MAX_CANDIDATES, expand};
use crate::dictionary::Dictionary;
use crate::error::{RegencyError, Result};
use crate::pattern::compiler;
use crate::pattern::rule::{Rule, RuleKind, RuleSequence};
use crate::settings::GeneratorSettings;

/// Resolves every rule in order and returns the concatenated output.
///
/// Uses the default candidate bound for range expansion. Nothing is returned
/// unless every rule resolves.
///
/// # Errors
/// - `EmptyDictionary` when a `DictionaryWord` rule meets an empty dictionary
/// - any range expansion error (`InvalidRange`, `RangeTooLarge`, `EmptyRange`)
pub fn generate(rules: &RuleSequence, dictionary: &Dictionary, rng: &mut RandomSource) -> Result<String> {
	generate_bounded(rules, dictionary, rng, DEFAULT_MAX_CANDIDATES)
}

fn generate_bounded(
	rules: &RuleSequence,
	dictionary: &Dictionary,
	rng: &mut RandomSource,
	max_candidates: usize,
) -> Result<String> {
	let mut output = String::new();
	for rule in rules {
		resolve(rule, dictionary, rng, max_candidates, &mut output)?;
	}
	debug!("generated {} char(s) from {} rule(s)", output.chars().count(), rules.len());
	Ok(output)
}

fn resolve(
	rule: &Rule,
	dictionary: &Dictionary,
	rng: &mut RandomSource,
	max_candidates: usize,
	output: &mut String,
) -> Result<()> {
	match rule.kind {
		RuleKind::DictionaryWord => {
			let word = rng.choose(dictionary.words()).ok_or(RegencyError::EmptyDictionary)?;
			trace!("word rule -> {word:?}");
			output.push_str(word);
		}
		RuleKind::CharacterRange => {
			let candidates = expand(&rule.spec, max_candidates)?;
			let index = rng.random_int_inclusive(0, candidates.len() - 1)?;
			trace!("range {:?} -> {:?}", rule.spec, candidates[index]);
			output.push(candidates[index]);
		}
	}
	Ok(())
}

/// High-level generator bundling a dictionary with generation settings.
///
/// # Responsibilities
/// - Compile patterns into rule sequences
/// - Resolve rule sequences against its dictionary
///
/// A `Generator` is immutable once built and can be shared between threads;
/// randomness is always supplied by the caller.
#[derive(Debug, Clone)]
pub struct Generator {
	dictionary: Dictionary,
	settings: GeneratorSettings,
}

impl Generator {
	/// Creates a generator with default settings.
	pub fn new(dictionary: Dictionary) -> Self {
		Self { dictionary, settings: GeneratorSettings::default() }
	}

	/// Replaces the generator's settings.
	pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	pub fn settings(&self) -> &GeneratorSettings {
		&self.settings
	}

	/// Compiles a pattern without generating anything.
	pub fn compile(&self, pattern: &str) -> Result<RuleSequence> {
		compiler::compile(pattern)
	}

	/// Compiles `pattern` and generates one string from it.
	pub fn generate(&self, pattern: &str, rng: &mut RandomSource) -> Result<String> {
		let rules = self.compile(pattern)?;
		self.generate_rules(&rules, rng)
	}

	/// Generates one string from an already compiled sequence.
	pub fn generate_rules(&self, rules: &RuleSequence, rng: &mut RandomSource) -> Result<String> {
		generate_bounded(rules, &self.dictionary, rng, self.settings.max_candidates())
	}
}
