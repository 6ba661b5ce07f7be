use std::str::CharIndices;

use log::debug;

use super::rule::{Rule, RuleSequence};
use crate::error::{RegencyError, Result};

/// Range expression for `\d`.
pub const DIGIT_SPEC: &str = "0-9";

/// Range expression for `\w`.
pub const WORD_CHAR_SPEC: &str = "a-zA-Z0-9_";

/// Compiles a pattern string into a `RuleSequence`.
///
/// One rule is appended per escape, bracket expression or literal character;
/// quantifiers and empty brackets append none. An empty pattern yields an
/// empty sequence.
///
/// # Errors
/// Returns `MalformedPattern` when a bracket or quantifier has no closing
/// delimiter, or when the pattern ends on a lone `\`.
pub fn compile(pattern: &str) -> Result<RuleSequence> {
	let rules = Compiler {
		chars: pattern.char_indices(),
		rules: RuleSequence::new(),
	}
	.run()?;
	debug!("compiled {:?} into {} rule(s)", pattern, rules.len());
	Ok(rules)
}

struct Compiler<'a> {
	chars: CharIndices<'a>,
	rules: RuleSequence,
}

impl Compiler<'_> {
	fn run(mut self) -> Result<RuleSequence> {
		while let Some((position, c)) = self.chars.next() {
			match c {
				'\\' => self.escape(position)?,
				'[' => {
					let buffer = self.delimited(position, ']')?;
					if !buffer.is_empty() {
						self.rules.push(Rule::range(buffer));
					}
				}
				'{' => {
					// Repetition is not implemented; the body is consumed and dropped.
					let _quantifier = self.delimited(position, '}')?;
				}
				other => self.rules.push(Rule::literal(other)),
			}
		}
		Ok(self.rules)
	}

	fn escape(&mut self, position: usize) -> Result<()> {
		let rule = match self.chars.next() {
			Some((_, 'd')) => Rule::range(DIGIT_SPEC),
			Some((_, 'w')) => Rule::range(WORD_CHAR_SPEC),
			Some((_, 'y')) => Rule::word(),
			Some((_, c)) => Rule::literal(c),
			None => {
				return Err(RegencyError::MalformedPattern {
					reason: "pattern ends with a lone '\\'".to_owned(),
					position,
				});
			}
		};
		self.rules.push(rule);
		Ok(())
	}

	/// Consumes characters up to `close`, returning what lies in between.
	///
	/// `position` is the offset of the opening delimiter, used for errors.
	fn delimited(&mut self, position: usize, close: char) -> Result<String> {
		let mut buffer = String::new();
		for (_, c) in self.chars.by_ref() {
			if c == close {
				return Ok(buffer);
			}
			buffer.push(c);
		}
		Err(RegencyError::MalformedPattern {
			reason: format!("missing closing '{close}'"),
			position,
		})
	}
}
