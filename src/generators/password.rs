// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{GenerationError, Result};
use crate::models::{CharacterClass, GeneratedPassword, GenerationOptions};

/// Builds the candidate pool for `options`.
///
/// Class alphabets are concatenated in declaration order, then the active
/// exclusion sets are filtered out. Relative order is preserved and duplicates
/// are kept.
pub fn build_pool(options: &GenerationOptions) -> Result<Vec<char>> {
    if options.enabled_classes.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let mut chars: Vec<char> = options
        .classes()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    for set in options.exclusions() {
        chars.retain(|&c| !set.contains(c));
    }

    Ok(chars)
}

/// Draws `length` characters uniformly, with replacement, from `pool`.
pub fn sample<R: Rng + ?Sized>(pool: &[char], length: usize, rng: &mut R) -> Result<Vec<char>> {
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    let dist = Uniform::from(0..pool.len());
    Ok((0..length).map(|_| pool[dist.sample(rng)]).collect())
}

/// Makes sure every enabled class shows up at least once, then shuffles.
///
/// Missing classes are handled in declaration order, each one overwriting the
/// next free position from the left. When the password is shorter than the
/// number of enabled classes, positions are overwritten strictly left to right
/// and the classes that do not fit are left out.
pub fn enforce_coverage<R: Rng + ?Sized>(
    mut chars: Vec<char>,
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<char> {
    let missing: Vec<CharacterClass> = options
        .classes()
        .filter(|class| !chars.iter().any(|&c| class.contains(c)))
        .collect();

    let protect_covered = chars.len() >= options.enabled_classes.len();

    let mut position = 0;
    for class in missing {
        // A position holding the only character of a covered class is not free
        while protect_covered
            && position < chars.len()
            && is_sole_carrier(&chars, position, options)
        {
            position += 1;
        }
        if position >= chars.len() {
            break;
        }

        let candidates: Vec<char> = class
            .alphabet()
            .chars()
            .filter(|&c| options.allows(c))
            .collect();

        if let Some(&c) = candidates.choose(rng) {
            chars[position] = c;
            position += 1;
        }
    }

    chars.shuffle(rng);
    chars
}

fn is_sole_carrier(chars: &[char], position: usize, options: &GenerationOptions) -> bool {
    let current = chars[position];
    options
        .classes()
        .find(|class| class.contains(current))
        .map_or(false, |class| chars.iter().filter(|&&c| class.contains(c)).count() == 1)
}

/// Runs the full pipeline (pool, sample, coverage, shuffle) with the given RNG.
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    let pool = build_pool(options)?;

    if options.length == 0 {
        return Err(GenerationError::InvalidLength);
    }

    let sampled = sample(&pool, options.length, rng)?;
    let password: String = enforce_coverage(sampled, options, rng).into_iter().collect();

    log::debug!(
        "Generated password: length={}, classes={:?}, pool_size={}",
        options.length,
        options.enabled_classes,
        pool.len()
    );

    Ok(GeneratedPassword::from(password))
}

/// Generates a password using the thread-local RNG.
pub fn generate_password(options: &GenerationOptions) -> Result<GeneratedPassword> {
    let mut rng = rand::thread_rng();
    generate_password_with(options, &mut rng)
}
