// src/generators/password.rs
use crate::error::{GeneratorError, Result};
use crate::generators::{Alphabet, RandomSource};
use crate::models::{GenerationPolicy, GeneratedPassword};

/// Draws passwords character by character from the policy's alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate one password of exactly `policy.length` characters.
    ///
    /// Each position takes an independent index in `[0, |alphabet|)` from
    /// `source`, so characters repeat freely. Fails with
    /// [`GeneratorError::InvalidPolicy`](crate::GeneratorError::InvalidPolicy)
    /// for a zero length. No upper bound is enforced here.
    pub fn generate<S>(&self, policy: &GenerationPolicy, source: &mut S) -> Result<GeneratedPassword>
    where
        S: RandomSource + ?Sized,
    {
        policy.validate()?;

        let alphabet = Alphabet::for_policy(policy);
        let mut password = String::with_capacity(policy.length);

        for _ in 0..policy.length {
            let index = source.index(alphabet.len());
            let c = alphabet.get(index).ok_or(GeneratorError::IndexOutOfRange {
                index,
                size: alphabet.len(),
            })?;
            password.push(c);
        }

        log::debug!(
            "Generated password of length {} from alphabet of {}",
            policy.length,
            alphabet.len()
        );

        Ok(GeneratedPassword::new(password))
    }

    pub fn generate_many<S>(
        &self,
        policy: &GenerationPolicy,
        count: usize,
        source: &mut S,
    ) -> Result<Vec<GeneratedPassword>>
    where
        S: RandomSource + ?Sized,
    {
        (0..count).map(|_| self.generate(policy, &mut *source)).collect()
    }
}

/// Generate with the thread-local OS seeded RNG.
pub fn generate_password(policy: &GenerationPolicy) -> Result<GeneratedPassword> {
    let mut rng = rand::thread_rng();
    PasswordGenerator::new().generate(policy, &mut rng)
}
