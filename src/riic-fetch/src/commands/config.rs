//! Config command handler

use anyhow::{Context, Result};
use riic::Config;
use std::path::Path;

/// Print the effective configuration
pub fn show(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# Built-in defaults"),
    }

    let text = config
        .to_toml_string()
        .context("Failed to render configuration")?;
    print!("{}", text);

    Ok(())
}
