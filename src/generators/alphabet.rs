// src/generators/alphabet.rs
use crate::models::GenerationPolicy;

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()[]{}-_+~";

/// Ordered characters a policy allows: letters, then digits, then symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
}

impl Alphabet {
    pub fn for_policy(policy: &GenerationPolicy) -> Self {
        let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

        chars.extend_from_slice(LETTERS);
        if policy.include_digits {
            chars.extend_from_slice(DIGITS);
        }
        if policy.include_symbols {
            chars.extend_from_slice(SYMBOLS);
        }

        Alphabet { chars }
    }

    // Never zero: letters are always present
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&c| c as char)
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    pub fn as_str(&self) -> &str {
        // Built only from ASCII constants
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }
}
