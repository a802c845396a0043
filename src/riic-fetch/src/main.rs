mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use riic::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riic=info,riic_fetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();
    let mut config = Config::load(config_path).with_context(|| match config_path {
        Some(path) => format!("Could not load config from {}", path.display()),
        None => "Could not build default config".to_string(),
    })?;

    match cli.command.unwrap_or_default() {
        Commands::Fetch(args) => {
            args.apply(&mut config);
            commands::fetch::handle(&config)?;
        }

        Commands::Config => {
            commands::config::show(&config, config_path)?;
        }
    }

    Ok(())
}
