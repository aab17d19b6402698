// src/generators/mod.rs
mod alphabet;
mod password;
mod source;

pub use alphabet::{Alphabet, DIGITS, LETTERS, SYMBOLS};
pub use password::{generate_password, PasswordGenerator};
pub use source::{RandomSource, SequenceSource};
