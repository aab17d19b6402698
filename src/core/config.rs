// src/core/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::models::GenerationPolicy;

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 8,
            default_include_digits: false,
            default_include_symbols: false,
            min_password_length: 8,
            max_password_length: 100,

            // Clipboard
            clipboard_clear_after: None,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH") {
            config.default_password_length = length;
        }

        if let Some(digits) = parse_var(&lookup, "DEFAULT_INCLUDE_DIGITS") {
            config.default_include_digits = digits;
        }

        if let Some(symbols) = parse_var(&lookup, "DEFAULT_INCLUDE_SYMBOLS") {
            config.default_include_symbols = symbols;
        }

        if let Some(min) = parse_var(&lookup, "MIN_PASSWORD_LENGTH") {
            config.min_password_length = min;
        }

        if let Some(max) = parse_var(&lookup, "MAX_PASSWORD_LENGTH") {
            config.max_password_length = max;
        }

        let defaults = Config::default();
        if config.min_password_length < 1 || config.min_password_length > config.max_password_length {
            log::warn!(
                "Invalid password length range {}..={}, using {}..={}",
                config.min_password_length,
                config.max_password_length,
                defaults.min_password_length,
                defaults.max_password_length
            );
            config.min_password_length = defaults.min_password_length;
            config.max_password_length = defaults.max_password_length;
        }

        // Clipboard
        if let Some(seconds) = parse_var::<u64, _>(&lookup, "CLIPBOARD_CLEAR_SECONDS") {
            config.clipboard_clear_after = if seconds == 0 {
                None
            } else {
                Some(Duration::from_secs(seconds))
            };
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }

    pub fn default_policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.clamp_length(self.default_password_length),
            include_digits: self.default_include_digits,
            include_symbols: self.default_include_symbols,
        }
    }

    pub fn clamp_length(&self, length: usize) -> usize {
        let clamped = length.clamp(self.min_password_length, self.max_password_length);
        if clamped != length {
            log::info!(
                "Password length {} outside {}..={}, using {}",
                length,
                self.min_password_length,
                self.max_password_length,
                clamped
            );
        }
        clamped
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}: could not parse '{}'", key, raw);
            None
        }
    }
}
