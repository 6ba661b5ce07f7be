//! Pattern compilation.
//!
//! A pattern is scanned left to right, one token at a time, and each token
//! appends at most one `Rule` to a `RuleSequence`:
//! - Escapes (`\d`, `\w`, `\y`, `\c`)
//! - Bracket expressions (`[...]`)
//! - Quantifiers (`{...}`), which append nothing
//! - Literal characters

/// Rule and rule sequence types produced by the compiler.
pub mod rule;

/// The token scanner turning a pattern string into rules.
pub mod compiler;
