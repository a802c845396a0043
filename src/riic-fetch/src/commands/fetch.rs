//! Fetch command handler

use anyhow::{Context, Result};
use riic::{Config, UreqSource};

/// Run the full pipeline against the live mirrors
pub fn handle(config: &Config) -> Result<()> {
    let source = UreqSource::new(config.timeout(), config.user_agent.as_deref());

    tracing::info!(
        static_dir = %config.static_dir.display(),
        data_dir = %config.data_dir.display(),
        "Starting {} layout run",
        config.layout
    );

    let summary = riic::run(config, &source).context("Data preparation failed")?;

    for path in &summary.written {
        println!("Wrote {}", path.display());
    }
    println!(
        "Operators: {}  Skills: {}  Facilities: {}",
        summary.operators, summary.skills, summary.facilities
    );
    println!(
        "Images: {} saved, {} already cached, {} skipped",
        summary.images.saved, summary.images.cached, summary.images.skipped
    );

    Ok(())
}
