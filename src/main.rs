//! `organize-albums` - rewrites `README.md` as an alphabetical album catalogue.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use organize_albums::config::Config;
use organize_albums::organize_file;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::debug!("{} {} starting", config.app_name(), config.app_version());

    organize_file(&config)
        .with_context(|| format!("Failed to organize {}", config.document_path.display()))?;

    Ok(())
}
