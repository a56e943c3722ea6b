// src/generators/strength.rs
use crate::models::{StrengthResult, StrengthTier};

// Analyze password strength
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let mut points = 0u8;

    // Length contribution
    if length >= 8 {
        points += 1;
    }
    if length >= 12 {
        points += 1;
    }
    if length >= 16 {
        points += 1;
    }

    // Character variety
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }

    let tier = tier_for(points);

    StrengthResult {
        tier,
        score: points,
        label: tier.label().to_string(),
        feedback: tier.feedback().to_string(),
        fill_percent: tier.fill_percent(),
    }
}

pub fn tier_for(points: u8) -> StrengthTier {
    match points {
        0..=2 => StrengthTier::Weak,
        3..=4 => StrengthTier::Medium,
        _ => StrengthTier::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_variety_is_strong() {
        let result = score("aB3!xxxxxxxx");
        // 12 chars: two length points plus four variety points
        assert_eq!(result.score, 6);
        assert_eq!(result.tier, StrengthTier::Strong);
        assert_eq!(result.fill_percent, 100);
    }

    #[test]
    fn test_short_lowercase_is_weak() {
        let result = score("abc");
        assert_eq!(result.score, 1);
        assert_eq!(result.tier, StrengthTier::Weak);
        assert_eq!(result.label, "weak");
        assert_eq!(result.fill_percent, 33);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(0), StrengthTier::Weak);
        assert_eq!(tier_for(2), StrengthTier::Weak);
        assert_eq!(tier_for(3), StrengthTier::Medium);
        assert_eq!(tier_for(4), StrengthTier::Medium);
        assert_eq!(tier_for(5), StrengthTier::Strong);
        assert_eq!(tier_for(7), StrengthTier::Strong);
    }

    #[test]
    fn test_maximum_score() {
        let result = score("aB3!aB3!aB3!aB3!");
        assert_eq!(result.score, 7);
        assert_eq!(result.tier, StrengthTier::Strong);
    }

    #[test]
    fn test_medium_password() {
        // length 8 (+1), lowercase (+1), digit (+1)
        let result = score("abcdef12");
        assert_eq!(result.score, 3);
        assert_eq!(result.tier, StrengthTier::Medium);
        assert_eq!(result.fill_percent, 66);
    }

    #[test]
    fn test_empty_password() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, StrengthTier::Weak);
    }

    #[test]
    fn test_score_is_pure() {
        assert_eq!(score("Tr0ub4dor&3"), score("Tr0ub4dor&3"));
    }
}
