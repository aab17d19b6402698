// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::{GeneratorError, Result};

/// What the caller asks for: a length and the optional character classes.
///
/// Upper and lower case Latin letters are always part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationPolicy {
    pub fn new(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_digits,
            include_symbols,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.length < 1 {
            return Err(GeneratorError::InvalidPolicy { length: self.length });
        }
        Ok(())
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 8,
            include_digits: false,
            include_symbols: false,
        }
    }
}

/// A freshly generated password. Read-only once built.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Number of characters, which is also the byte length since every
    // alphabet character is ASCII
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep the value out of debug logs
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("len", &self.0.len())
            .finish()
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        let policy = GenerationPolicy::new(0, true, true);
        assert_eq!(
            policy.validate(),
            Err(GeneratorError::InvalidPolicy { length: 0 })
        );
    }

    #[test]
    fn default_matches_interactive_defaults() {
        let policy = GenerationPolicy::default();
        assert_eq!(policy.length, 8);
        assert!(!policy.include_digits);
        assert!(!policy.include_symbols);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn debug_output_hides_value() {
        let password = GeneratedPassword::new("hunter2".to_string());
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("hunter2"));
        assert_eq!(password.to_string(), "hunter2");
    }

    #[test]
    fn policy_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(GenerationPolicy::new(12, true, false)).unwrap();
        assert_eq!(json["length"], 12);
        assert_eq!(json["include_digits"], true);
        assert_eq!(json["include_symbols"], false);
    }
}
