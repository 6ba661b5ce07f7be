//! Pattern-driven random string generation library.
//!
//! This crate provides a small regex-like generation system including:
//! - A pattern compiler turning a pattern string into a sequence of rules
//! - A generation engine resolving each rule into characters or words
//! - An injectable, seedable random source
//! - Word dictionaries (built-in or loaded from disk)
//!
//! # Pattern syntax
//!
//! | Token   | Meaning                                      |
//! |---------|----------------------------------------------|
//! | `\d`    | One digit `0-9`                              |
//! | `\w`    | One word character `a-zA-Z0-9_`              |
//! | `\y`    | One random dictionary word                   |
//! | `\c`    | Literal character `c`                        |
//! | `[...]` | One character from the enclosed range        |
//! | `{...}` | Quantifier, parsed but currently a no-op     |
//! | `c`     | Literal character `c`                        |
//!
//! ```
//! use regency_core::{Dictionary, Generator, RandomSource};
//!
//! let generator = Generator::new(Dictionary::builtin());
//! let mut rng = RandomSource::from_seed(7);
//! let out = generator.generate("id-\\d\\d", &mut rng).unwrap();
//! assert!(out.starts_with("id-"));
//! ```

/// Pattern compiler: rules, rule sequences and the token scanner.
pub mod pattern;

/// Generation engine: range expansion, random source and the `Generator` facade.
pub mod engine;

/// Word list used by `\y` tokens.
pub mod dictionary;

/// Generation settings.
pub mod settings;

/// Error taxonomy shared by every stage.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use dictionary::Dictionary;
pub use engine::generator::{Generator, generate};
pub use engine::random::RandomSource;
pub use error::{RegencyError, Result};
pub use pattern::compiler::compile;
pub use pattern::rule::{Rule, RuleKind, RuleSequence};
pub use settings::GeneratorSettings;
