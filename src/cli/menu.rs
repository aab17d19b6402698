// src/cli/menu.rs
use console::style;
use inquire::{CustomType, Select};

use crate::cli::clipboard::ClipboardSession;
use crate::core::Config;
use crate::error::AppError;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, GenerationPolicy};
use crate::strength;

const CHANGE_LENGTH: &str = "Change length";
const TOGGLE_DIGITS: &str = "Toggle numbers";
const TOGGLE_SYMBOLS: &str = "Toggle characters";
const REGENERATE: &str = "Regenerate";
const COPY: &str = "Copy to clipboard";
const QUIT: &str = "Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ChangeLength(usize),
    ToggleDigits,
    ToggleSymbols,
    Regenerate,
    Copy,
    Quit,
}

/// Apply a menu action to the policy. Returns whether a new password is due.
pub fn apply_action(policy: &mut GenerationPolicy, action: MenuAction, config: &Config) -> bool {
    match action {
        MenuAction::ChangeLength(length) => {
            let length = config.clamp_length(length);
            let changed = policy.length != length;
            policy.length = length;
            changed
        }
        MenuAction::ToggleDigits => {
            policy.include_digits = !policy.include_digits;
            true
        }
        MenuAction::ToggleSymbols => {
            policy.include_symbols = !policy.include_symbols;
            true
        }
        MenuAction::Regenerate => true,
        MenuAction::Copy | MenuAction::Quit => false,
    }
}

pub fn run_interactive_menu(config: &Config) -> Result<(), AppError> {
    println!("{}", style("Password generator").bold());

    let generator = PasswordGenerator::new();
    let mut rng = rand::thread_rng();
    let mut policy = config.default_policy();
    let mut password = generator.generate(&policy, &mut rng)?;
    let mut clipboard = ClipboardSession::system(config.clipboard_clear_after);

    loop {
        print_state(&policy, &password);

        let action = prompt_action(&policy, config)?;
        if action == MenuAction::Quit {
            break;
        }

        if action == MenuAction::Copy {
            clipboard.copy(password.as_str())?;
            println!("{}", style("Copied to clipboard").green());
            continue;
        }

        if apply_action(&mut policy, action, config) {
            password = generator.generate(&policy, &mut rng)?;
        }
    }

    if clipboard.has_pending_restore() {
        println!("Waiting to clear the clipboard...");
    }
    clipboard.wait();

    Ok(())
}

fn print_state(policy: &GenerationPolicy, password: &GeneratedPassword) {
    let score = strength::score(password.as_str());
    println!();
    println!("  {}", style(password).cyan().bold());
    println!(
        "  Length: {}  Numbers: {}  Characters: {}  Strength: {}/100",
        policy.length,
        on_off(policy.include_digits),
        on_off(policy.include_symbols),
        score
    );
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn prompt_action(policy: &GenerationPolicy, config: &Config) -> Result<MenuAction, AppError> {
    let options = vec![CHANGE_LENGTH, TOGGLE_DIGITS, TOGGLE_SYMBOLS, REGENERATE, COPY, QUIT];
    let choice = Select::new("What next?", options).prompt()?;

    let action = match choice {
        CHANGE_LENGTH => {
            let prompt = format!(
                "Length ({}-{}):",
                config.min_password_length, config.max_password_length
            );
            let length = CustomType::<usize>::new(&prompt)
                .with_default(policy.length)
                .with_error_message("Please type a whole number")
                .prompt()?;
            MenuAction::ChangeLength(length)
        }
        TOGGLE_DIGITS => MenuAction::ToggleDigits,
        TOGGLE_SYMBOLS => MenuAction::ToggleSymbols,
        REGENERATE => MenuAction::Regenerate,
        COPY => MenuAction::Copy,
        _ => MenuAction::Quit,
    };

    Ok(action)
}
