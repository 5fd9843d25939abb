mod platform;

use anyhow::Result;
use clap::Parser;

use platform::config::{AppConfig, Cli};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    platform::logging::initialize(&config.log);
    platform::run_app(config)
}
