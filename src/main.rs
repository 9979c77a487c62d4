//! `hot_fire` - write the lyric collection to `hot_fire_like_dylan.json` and echo it.

use std::io;

use hot_fire::error::Result;
use hot_fire::{lyrics, Config, Exporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only ever carries the JSON echo
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load()?;
    tracing::debug!("Exporting to {}", config.destination().display());

    let raw = match &config.source {
        Some(path) => lyrics::load_source(path)?,
        None => lyrics::builtin().iter().map(|s| (*s).to_string()).collect(),
    };

    let exporter = Exporter::new(&config);
    let report = exporter.export(&raw, &mut io::stdout().lock())?;

    tracing::info!(
        "Exported {} lyrics ({} truncated) into {}",
        report.count,
        report.truncated,
        exporter.output_dir().display()
    );
    Ok(())
}
