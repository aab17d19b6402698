// src/strength.rs
use std::collections::HashSet;
use std::fmt;
use serde::Serialize;

use crate::generators::Alphabet;
use crate::models::GenerationPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Strength::VeryWeak,
            20..=39 => Strength::Weak,
            40..=59 => Strength::Moderate,
            60..=79 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::VeryWeak => write!(f, "Very weak"),
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
            Strength::VeryStrong => write!(f, "Very strong"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub rating: Strength,
    pub feedback: Vec<String>,
}

// Which classes a password draws from. Anything outside ASCII letters and
// digits counts as a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        CharClasses {
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

// Score a password from 0 to 100
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let classes = CharClasses::of(password);

    // Length contribution (up to 40 points)
    let mut score = length.min(40) as u8;

    // Character variety (10 points each)
    for present in [classes.lower, classes.upper, classes.digit, classes.symbol] {
        if present {
            score += 10;
        }
    }

    // Heavy repetition
    if password.chars().collect::<HashSet<_>>().len() < length / 2 {
        score = score.saturating_sub(10);
    }

    score.min(100)
}

/// Bits of entropy for a password drawn uniformly from the policy's alphabet.
pub fn entropy_bits(policy: &GenerationPolicy) -> f64 {
    let alphabet = Alphabet::for_policy(policy);
    policy.length as f64 * (alphabet.len() as f64).log2()
}

pub fn analyze(password: &str) -> StrengthReport {
    let score = score(password);
    let rating = Strength::from_score(score);
    let length = password.chars().count();
    let CharClasses {
        upper: has_upper,
        digit: has_digit,
        symbol: has_symbol,
        ..
    } = CharClasses::of(password);

    let mut feedback = Vec::new();

    match rating {
        Strength::VeryWeak => {
            feedback.push("Consider using a longer password with mixed character types".to_string());
        }
        Strength::Weak => {
            if !has_upper {
                feedback.push("Add uppercase letters for better security".to_string());
            }
            if !has_digit {
                feedback.push("Add numbers for better security".to_string());
            }
            if !has_symbol {
                feedback.push("Add symbols for better security".to_string());
            }
            if length < 12 {
                feedback.push("Increase password length to at least 12 characters".to_string());
            }
        }
        Strength::Moderate => {
            if length < 12 {
                feedback.push("Consider increasing password length to at least 12 characters".to_string());
            }
            if !has_symbol {
                feedback.push("Add symbols for better security".to_string());
            }
        }
        Strength::Strong => {
            if length < 16 {
                feedback.push("For maximum security, consider increasing length to 16+ characters".to_string());
            }
        }
        Strength::VeryStrong => {}
    }

    if let Some(message) = sequential_run_feedback(password) {
        feedback.push(message.to_string());
    }

    StrengthReport {
        score,
        rating,
        feedback,
    }
}

// Looks for three ascending letters ("abc") or digits ("123") in a row
fn sequential_run_feedback(password: &str) -> Option<&'static str> {
    let mut letters = 1;
    let mut digits = 1;

    let mut chars = password.chars();
    let mut prev = chars.next()?;

    for curr in chars {
        let ascending = (curr as u32) == (prev as u32) + 1;

        letters = if ascending && curr.is_ascii_alphabetic() && prev.is_ascii_alphabetic() {
            letters + 1
        } else {
            1
        };
        digits = if ascending && curr.is_ascii_digit() && prev.is_ascii_digit() {
            digits + 1
        } else {
            1
        };

        if letters >= 3 {
            return Some("Avoid using consecutive letters (e.g., 'abc')");
        }
        if digits >= 3 {
            return Some("Avoid using consecutive numbers (e.g., '123')");
        }

        prev = curr;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(analyze("").rating, Strength::VeryWeak);
    }

    #[test]
    fn variety_and_length_add_up() {
        // 12 chars + lower + upper + digit + symbol
        assert_eq!(score("Abcdef12345!"), 52);
        // capped length contribution
        let long: String = "aB3$".repeat(20);
        assert_eq!(score(&long), 70);
    }

    #[test]
    fn repetition_penalty_does_not_underflow() {
        // 4 points of length, 10 for lowercase, then -10 for repetition
        assert_eq!(score("aaaa"), 4);
        // spaces count as symbols
        assert_eq!(score("  "), 12);
    }

    #[test]
    fn feedback_agrees_with_score_for_non_ascii() {
        // Ü is not an ASCII capital, so it earns no uppercase points
        let report = analyze("Übermäßig");
        assert_eq!(report.score, 29);
        assert_eq!(report.rating, Strength::Weak);
        assert!(report.feedback.iter().any(|f| f.contains("uppercase")));
        assert!(!report.feedback.iter().any(|f| f.contains("symbols")));

        // Arabic-Indic digits are not ASCII digits either
        let report = analyze("abcdefghij١٢");
        assert!(report.feedback.iter().any(|f| f.contains("numbers")));
    }

    #[test]
    fn buckets() {
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
        assert_eq!(Strength::from_score(20), Strength::Weak);
        assert_eq!(Strength::from_score(59), Strength::Moderate);
        assert_eq!(Strength::from_score(60), Strength::Strong);
        assert_eq!(Strength::from_score(100), Strength::VeryStrong);
    }

    #[test]
    fn sequential_runs_are_flagged() {
        let report = analyze("xyzQwerty");
        assert!(report.feedback.iter().any(|f| f.contains("consecutive letters")));

        let report = analyze("Pass789word");
        assert!(report.feedback.iter().any(|f| f.contains("consecutive numbers")));

        assert!(sequential_run_feedback("a1b2c3").is_none());
    }

    #[test]
    fn entropy_grows_with_alphabet() {
        let letters = entropy_bits(&GenerationPolicy::new(8, false, false));
        let everything = entropy_bits(&GenerationPolicy::new(8, true, true));
        assert!((letters - 8.0 * 52f64.log2()).abs() < 1e-9);
        assert!(everything > letters);
    }
}
