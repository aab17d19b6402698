//! Password generation with configurable character classes.
//!
//! The alphabet is always the 52 Latin letters, optionally followed by the
//! digits and then a fixed set of symbols. Randomness is injected through
//! [`RandomSource`], so any `rand::Rng` works and seeded generators give
//! reproducible output.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use rust_passgen::{GenerationPolicy, PasswordGenerator};
//!
//! let policy = GenerationPolicy::new(16, true, false);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let password = PasswordGenerator::new().generate(&policy, &mut rng)?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), rust_passgen::GeneratorError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod strength;

pub use error::{AppError, GeneratorError, Result};
pub use generators::{generate_password, Alphabet, PasswordGenerator, RandomSource, SequenceSource};
pub use models::{GeneratedPassword, GenerationPolicy};
