use regency_core::{
	Dictionary, Generator, RandomSource, RegencyError, RuleKind, RuleSequence, compile, generate,
};

fn run(pattern: &str, seed: u64) -> String {
	let rules = compile(pattern).unwrap();
	generate(&rules, &Dictionary::builtin(), &mut RandomSource::from_seed(seed)).unwrap()
}

#[test]
fn literal_patterns_are_reproduced_exactly() {
	for pattern in ["hello", "a-b|c]d}e", "", "user_42 @ host.example"] {
		for seed in 0..5 {
			assert_eq!(run(pattern, seed), pattern);
		}
	}
}

#[test]
fn digit_escape_covers_every_digit() {
	let rules = compile("\\d").unwrap();
	let dictionary = Dictionary::builtin();
	let mut rng = RandomSource::from_seed(2024);
	let mut seen = [false; 10];
	for _ in 0..1000 {
		let out = generate(&rules, &dictionary, &mut rng).unwrap();
		let mut chars = out.chars();
		let digit = chars.next().unwrap();
		assert!(chars.next().is_none());
		assert!(digit.is_ascii_digit(), "{out}");
		seen[digit as usize - '0' as usize] = true;
	}
	assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn bracket_range_stays_inside_range() {
	let mut rng = RandomSource::from_seed(1);
	let rules = compile("[a-c]").unwrap();
	for _ in 0..300 {
		let out = generate(&rules, &Dictionary::builtin(), &mut rng).unwrap();
		assert!(["a", "b", "c"].contains(&out.as_str()), "{out}");
	}
}

#[test]
fn bracket_union_stays_inside_union() {
	let mut rng = RandomSource::from_seed(1);
	let rules = compile("[a-c|x|z]").unwrap();
	for _ in 0..300 {
		let out = generate(&rules, &Dictionary::builtin(), &mut rng).unwrap();
		assert!(["a", "b", "c", "x", "z"].contains(&out.as_str()), "{out}");
	}
}

#[test]
fn dictionary_word_comes_from_dictionary() {
	let dictionary = Dictionary::from_words(["red", "green", "blue"]);
	let rules = compile("\\y").unwrap();
	let mut rng = RandomSource::from_seed(3);
	for _ in 0..100 {
		let out = generate(&rules, &dictionary, &mut rng).unwrap();
		assert!(dictionary.words().contains(&out), "{out}");
	}

	let empty = Dictionary::default();
	assert!(matches!(
		generate(&rules, &empty, &mut rng),
		Err(RegencyError::EmptyDictionary)
	));
}

#[test]
fn mixed_scenario_compiles_and_generates() {
	let rules = compile("ab\\d[xy]").unwrap();
	let kinds: Vec<(RuleKind, &str)> = rules.iter().map(|r| (r.kind, r.spec.as_str())).collect();
	assert_eq!(
		kinds,
		vec![
			(RuleKind::CharacterRange, "a"),
			(RuleKind::CharacterRange, "b"),
			(RuleKind::CharacterRange, "0-9"),
			(RuleKind::CharacterRange, "xy"),
		]
	);

	let mut rng = RandomSource::from_seed(77);
	for _ in 0..200 {
		let out: Vec<char> = generate(&rules, &Dictionary::builtin(), &mut rng).unwrap().chars().collect();
		assert_eq!(out.len(), 4);
		assert_eq!(&out[..2], &['a', 'b']);
		assert!(out[2].is_ascii_digit());
		assert!(out[3] == 'x' || out[3] == 'y');
	}
}

#[test]
fn empty_pattern_and_empty_sequence() {
	assert!(compile("").unwrap().is_empty());
	let out = generate(&RuleSequence::new(), &Dictionary::default(), &mut RandomSource::from_seed(0)).unwrap();
	assert_eq!(out, "");
}

#[test]
fn single_point_range_always_yields_it() {
	for seed in 0..20 {
		assert_eq!(run("[a-a]", seed), "a");
	}
}

#[test]
fn unterminated_bracket_is_rejected() {
	assert!(matches!(compile("[abc"), Err(RegencyError::MalformedPattern { .. })));
}

#[test]
fn word_escape_uses_word_characters() {
	let generator = Generator::new(Dictionary::builtin());
	let mut rng = RandomSource::from_seed(9);
	for _ in 0..200 {
		let out = generator.generate("\\w", &mut rng).unwrap();
		let c = out.chars().next().unwrap();
		assert!(c.is_ascii_alphanumeric() || c == '_', "{out}");
	}
}

#[test]
fn quantifier_is_a_no_op() {
	assert_eq!(run("a{5}", 0), "a");
}

#[test]
fn chained_bracket_range_never_yields_dash() {
	let rules = compile("[a-c-e]").unwrap();
	let mut rng = RandomSource::from_seed(4);
	for _ in 0..300 {
		let out = generate(&rules, &Dictionary::builtin(), &mut rng).unwrap();
		assert!(["a", "b", "c", "d", "e"].contains(&out.as_str()), "{out}");
	}
}
