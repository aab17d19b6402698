// src/cli/commands.rs
use clap::builder::RangedU64ValueParser;
use clap::{Args as ClapArgs, Subcommand};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Pick options from a menu and regenerate as they change
    Interactive,

    /// Rate the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },
}

#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include digits 0-9
    #[arg(long, short = 'd', conflicts_with = "no_digits")]
    pub digits: bool,

    /// Leave out digits even when DEFAULT_INCLUDE_DIGITS is set
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols !@#$%^&*()[]{}-_+~
    #[arg(long, short = 's', conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols even when DEFAULT_INCLUDE_SYMBOLS is set
    #[arg(long)]
    pub no_symbols: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of passwords to generate
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: usize,

    /// Copy the (last) password to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Accept any length of at least 1 instead of the configured range
    #[arg(long)]
    pub no_clamp: bool,
}
