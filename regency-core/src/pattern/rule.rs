use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of generation instruction carried by a `Rule`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
	/// One character drawn from a range expression.
	CharacterRange,
	/// One word drawn from the dictionary.
	DictionaryWord,
}

impl fmt::Display for RuleKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RuleKind::CharacterRange => write!(f, "range"),
			RuleKind::DictionaryWord => write!(f, "word"),
		}
	}
}

/// One atomic generation instruction.
///
/// For `CharacterRange`, `spec` is the range expression (`"a-z"`, `"0-9A-F"`,
/// a single literal, or a `|`-separated union). It is kept as written and only
/// expanded at generation time. For `DictionaryWord`, `spec` is empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
	pub kind: RuleKind,
	pub spec: String,
}

impl Rule {
	/// Creates a `CharacterRange` rule from a range expression.
	pub fn range(spec: impl Into<String>) -> Self {
		Self { kind: RuleKind::CharacterRange, spec: spec.into() }
	}

	/// Creates a `CharacterRange` rule matching exactly `c`.
	pub fn literal(c: char) -> Self {
		Self::range(c.to_string())
	}

	/// Creates a `DictionaryWord` rule.
	pub fn word() -> Self {
		Self { kind: RuleKind::DictionaryWord, spec: String::new() }
	}
}

/// Ordered list of rules, in pattern-encounter order.
///
/// Append-only while compiling, read-only while generating.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSequence {
	rules: Vec<Rule>,
}

impl RuleSequence {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a rule at the end of the sequence.
	pub(crate) fn push(&mut self, rule: Rule) {
		self.rules.push(rule);
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
		self.rules.iter()
	}

	/// Read-only view of the rules.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}
}

impl<'a> IntoIterator for &'a RuleSequence {
	type Item = &'a Rule;
	type IntoIter = std::slice::Iter<'a, Rule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.iter()
	}
}

/// Diagnostic dump: one `kind<TAB>spec` line per rule.
///
/// Debugging aid only, the format is not stable.
impl fmt::Display for RuleSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for rule in &self.rules {
			writeln!(f, "{}\t{}", rule.kind, rule.spec)?;
		}
		Ok(())
	}
}
