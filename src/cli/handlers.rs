// src/cli/handlers.rs
use console::style;
use rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cli::clipboard::copy_to_clipboard;
use crate::cli::{menu, Args, CliCommand, GenerateArgs};
use crate::core::Config;
use crate::error::AppError;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, GenerationPolicy};
use crate::strength::{self, StrengthReport};

#[derive(Debug, Serialize)]
struct GeneratedEntry<'a> {
    password: &'a GeneratedPassword,
    score: u8,
}

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    policy: &'a GenerationPolicy,
    entropy_bits: f64,
    passwords: Vec<GeneratedEntry<'a>>,
}

pub fn handle_command(args: &Args, config: &Config) -> Result<(), AppError> {
    match &args.command {
        Some(CliCommand::Generate(generate)) => handle_generate(generate, config, args.json),
        Some(CliCommand::Interactive) => menu::run_interactive_menu(config),
        Some(CliCommand::Analyze { password }) => handle_analyze(password, args.json),
        None => {
            let generate = GenerateArgs {
                count: 1,
                ..GenerateArgs::default()
            };
            handle_generate(&generate, config, args.json)
        }
    }
}

// --no-digits / --no-symbols win over both the flags and the configured defaults
pub fn policy_from_args(args: &GenerateArgs, config: &Config) -> GenerationPolicy {
    let requested = args.length.unwrap_or(config.default_password_length);
    let length = if args.no_clamp {
        requested
    } else {
        config.clamp_length(requested)
    };

    GenerationPolicy {
        length,
        include_digits: !args.no_digits && (args.digits || config.default_include_digits),
        include_symbols: !args.no_symbols && (args.symbols || config.default_include_symbols),
    }
}

pub fn random_source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded ChaCha20 source");
            Box::new(ChaCha20Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<(), AppError> {
    let policy = policy_from_args(args, config);
    let mut rng = random_source(args.seed);
    let passwords = PasswordGenerator::new().generate_many(&policy, args.count, &mut rng)?;

    println!("{}", render_generated(&policy, &passwords, json)?);

    if args.copy {
        if let Some(last) = passwords.last() {
            let session = copy_to_clipboard(last.as_str(), config.clipboard_clear_after)?;
            eprintln!("{}", style("Copied to clipboard").green());

            if let Some(after) = config.clipboard_clear_after {
                eprintln!("Clipboard will be cleared in {} seconds", after.as_secs());
            }
            session.wait();
        }
    }

    Ok(())
}

pub fn render_generated(
    policy: &GenerationPolicy,
    passwords: &[GeneratedPassword],
    json: bool,
) -> Result<String, AppError> {
    let entropy_bits = strength::entropy_bits(policy);

    if json {
        let output = GenerateOutput {
            policy,
            entropy_bits,
            passwords: passwords
                .iter()
                .map(|password| GeneratedEntry {
                    password,
                    score: strength::score(password.as_str()),
                })
                .collect(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let lines: Vec<String> = passwords
        .iter()
        .map(|password| {
            let score = strength::score(password.as_str());
            format!(
                "{}  {}",
                password,
                style(format!("[{}/100 {}]", score, strength::Strength::from_score(score))).dim()
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), AppError> {
    let report = strength::analyze(password);
    println!("{}", render_report(&report, json)?);
    Ok(())
}

pub fn render_report(report: &StrengthReport, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = format!("Strength: {}/100 ({})", report.score, report.rating);
    for line in &report.feedback {
        out.push_str(&format!("\n  - {}", line));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;

    #[test]
    fn args_clamp_unless_told_not_to() {
        let config = Config::default();

        let args = GenerateArgs { length: Some(3), count: 1, ..GenerateArgs::default() };
        assert_eq!(policy_from_args(&args, &config).length, 8);

        let args = GenerateArgs { length: Some(3), no_clamp: true, count: 1, ..GenerateArgs::default() };
        assert_eq!(policy_from_args(&args, &config).length, 3);
    }

    #[test]
    fn config_defaults_enable_classes() {
        let config = Config {
            default_include_symbols: true,
            ..Config::default()
        };
        let args = GenerateArgs { digits: true, count: 1, ..GenerateArgs::default() };
        let policy = policy_from_args(&args, &config);
        assert!(policy.include_digits);
        assert!(policy.include_symbols);
        assert_eq!(policy.length, 8);
    }

    #[test]
    fn negative_flags_override_config_defaults() {
        let config = Config {
            default_include_digits: true,
            default_include_symbols: true,
            ..Config::default()
        };
        let args = GenerateArgs { no_digits: true, no_symbols: true, count: 1, ..GenerateArgs::default() };
        let policy = policy_from_args(&args, &config);
        assert!(!policy.include_digits);
        assert!(!policy.include_symbols);

        let args = GenerateArgs { no_symbols: true, count: 1, ..GenerateArgs::default() };
        let policy = policy_from_args(&args, &config);
        assert!(policy.include_digits);
        assert!(!policy.include_symbols);
    }

    #[test]
    fn unclamped_zero_length_is_an_error() {
        let config = Config::default();
        let args = GenerateArgs { length: Some(0), no_clamp: true, count: 1, ..GenerateArgs::default() };
        match handle_generate(&args, &config, false) {
            Err(AppError::Generator(GeneratorError::InvalidPolicy { length: 0 })) => {}
            other => panic!("expected invalid policy, got {:?}", other),
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let policy = GenerationPolicy::new(24, true, true);
        let generator = PasswordGenerator::new();
        let a = generator.generate(&policy, &mut random_source(Some(11))).unwrap();
        let b = generator.generate(&policy, &mut random_source(Some(11))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn json_output_lists_every_password() {
        let policy = GenerationPolicy::new(12, true, false);
        let passwords = PasswordGenerator::new()
            .generate_many(&policy, 2, &mut random_source(Some(1)))
            .unwrap();

        let rendered = render_generated(&policy, &passwords, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["policy"]["length"], 12);
        assert_eq!(value["passwords"].as_array().unwrap().len(), 2);
        assert_eq!(value["passwords"][0]["password"], passwords[0].as_str());
        assert!(value["entropy_bits"].as_f64().unwrap() > 70.0);
    }

    #[test]
    fn text_report_lists_feedback() {
        let rendered = render_report(&strength::analyze("abc"), false).unwrap();
        assert!(rendered.starts_with("Strength: "));
        assert!(rendered.contains("consecutive letters"));
    }
}
