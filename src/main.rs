use clap::Parser;
use std::path::Path;

use rust_passgen::cli::{handlers, Args};
use rust_passgen::core::config::{parse_log_level, Config};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let log_level = args
        .log_level
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(Config::default().log_level);

    // Logs go to stderr so stdout stays clean for the passwords
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    handlers::handle_command(&args, &config)?;

    Ok(())
}
