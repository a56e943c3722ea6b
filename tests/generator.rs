use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_passgen::generators::{self, generate_password_with};
use rust_passgen::models::ExclusionSet;
use rust_passgen::{CharacterClass, GenerationError, GenerationOptions, RecentHistory, Session, StrengthTier};

/// Every non-empty subset of the four classes.
fn class_subsets() -> Vec<Vec<CharacterClass>> {
    (1u8..16)
        .map(|mask| {
            CharacterClass::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, class)| *class)
                .collect()
        })
        .collect()
}

#[test]
fn test_every_enabled_class_is_covered() {
    for classes in class_subsets() {
        for (seed, length) in (classes.len()..classes.len() + 12).enumerate() {
            for (similar, ambiguous) in [(false, false), (true, false), (false, true), (true, true)] {
                let options = GenerationOptions::new(length, &classes)
                    .with_exclude_similar(similar)
                    .with_exclude_ambiguous(ambiguous);
                let mut rng = StdRng::seed_from_u64(seed as u64 * 31 + length as u64);
                let pool = generators::build_pool(&options).unwrap();
                let pwd = generate_password_with(&options, &mut rng).unwrap();

                assert_eq!(pwd.len(), length);
                assert!(pwd.as_str().chars().all(|c| pool.contains(&c)), "{pwd} uses chars outside the pool");
                for class in &classes {
                    assert!(
                        pwd.as_str().chars().any(|c| class.contains(c)),
                        "{pwd} is missing {class} for {options:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_no_class_selected() {
    let options = GenerationOptions::new(12, &[]).with_exclude_similar(true);
    assert_eq!(generators::generate_password(&options), Err(GenerationError::NoClassSelected));
}

#[test]
fn test_exclusions_hold_across_many_seeds() {
    let options = GenerationOptions::new(40, &CharacterClass::ALL)
        .with_exclude_similar(true)
        .with_exclude_ambiguous(true);
    for seed in 0..250 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pwd = generate_password_with(&options, &mut rng).unwrap();
        for c in pwd.as_str().chars() {
            assert!(!ExclusionSet::SimilarChars.contains(c), "similar char {c:?} in {pwd}");
            assert!(!ExclusionSet::AmbiguousChars.contains(c), "ambiguous char {c:?} in {pwd}");
        }
    }
}

#[test]
fn test_length_below_class_count_still_succeeds() {
    let options = GenerationOptions::new(2, &CharacterClass::ALL);
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pwd = generate_password_with(&options, &mut rng).unwrap();
        assert_eq!(pwd.len(), 2);
    }

    let single = GenerationOptions::new(1, &[CharacterClass::Digits, CharacterClass::Symbols]);
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(generate_password_with(&single, &mut rng).unwrap().len(), 1);
}

#[test]
fn test_lowercase_digits_example() {
    let options = GenerationOptions::new(12, &[CharacterClass::Lowercase, CharacterClass::Digits]);
    let pwd = generators::generate_password(&options).unwrap();
    let s = pwd.as_str();
    assert_eq!(s.chars().count(), 12);
    assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    assert!(s.chars().any(|c| c.is_ascii_lowercase()));
    assert!(s.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_strength_examples() {
    let strong = generators::score("aB3!xxxxxxxx");
    assert_eq!(strong.score, 6);
    assert_eq!(strong.tier, StrengthTier::Strong);
    assert_eq!(strong.fill_percent, 100);

    let weak = generators::score("abc");
    assert_eq!(weak.score, 1);
    assert_eq!(weak.tier, StrengthTier::Weak);
    assert_eq!(weak.fill_percent, 33);
}

#[test]
fn test_history_through_session() {
    let mut session = Session::new();
    let options = GenerationOptions::new(20, &CharacterClass::ALL);
    let mut generated = Vec::new();
    for seed in 0..6 {
        let mut rng = StdRng::seed_from_u64(seed);
        generated.push(session.generate_with(&options, &mut rng).unwrap().password.to_string());
    }

    let expected: Vec<String> = generated.iter().rev().take(5).cloned().collect();
    assert_eq!(session.history().passwords(), expected);
}

#[test]
fn test_history_same_password_twice() {
    let mut history = RecentHistory::new();
    let pwd = "Same-Password-1".into();
    history.record_and_get_history(&pwd);
    let snapshot = history.record_and_get_history(&pwd);
    assert_eq!(snapshot, vec!["Same-Password-1".to_string()]);
}
